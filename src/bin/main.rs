use speedcheck::{reset_stdout, start_speedcheck};

fn main() -> anyhow::Result<()> {
    let mut run_error_hook = false;

    start_speedcheck(&mut run_error_hook).inspect_err(|_| {
        if run_error_hook {
            reset_stdout();
        }
    })
}
