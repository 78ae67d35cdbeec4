use concat_string::concat_string;
use tui::style::Color;
use unicode_segmentation::UnicodeSegmentation;

/// Convert a hex string to a colour. Accepts `#rrggbb` and `#rgb`.
pub(super) fn try_hex_to_colour(hex: &str) -> Result<Color, String> {
    fn component(hex: &str, first: &str, second: &str) -> Result<u8, String> {
        u8::from_str_radix(&concat_string!(first, second), 16)
            .map_err(|_| format!("'{hex}' is an invalid hex color, could not decode."))
    }

    let invalid_format = || {
        format!(
            "'{hex}' is an invalid hex color. It must be either a 7 character hex string of the form '#12ab3c' or a 3 character hex string of the form '#1a2'.",
        )
    };

    let Some(digits) = hex.strip_prefix('#') else {
        return Err(invalid_format());
    };

    let digits: Vec<&str> = digits.graphemes(true).collect();
    match digits.as_slice() {
        [r1, r2, g1, g2, b1, b2] => Ok(Color::Rgb(
            component(hex, r1, r2)?,
            component(hex, g1, g2)?,
            component(hex, b1, b2)?,
        )),
        [r, g, b] => Ok(Color::Rgb(
            component(hex, r, r)?,
            component(hex, g, g)?,
            component(hex, b, b)?,
        )),
        _ => Err(invalid_format()),
    }
}

/// Parses a colour name, a hex colour, or a comma-separated RGB triple.
pub fn str_to_colour(input_val: &str) -> Result<Color, String> {
    if input_val.len() > 1 {
        if input_val.starts_with('#') {
            try_hex_to_colour(input_val)
        } else if input_val.contains(',') {
            convert_rgb_to_color(input_val)
        } else {
            convert_name_to_colour(input_val)
        }
    } else {
        Err(format!("Value '{input_val}' is not valid."))
    }
}

fn convert_rgb_to_color(rgb_str: &str) -> Result<Color, String> {
    let parts: Vec<&str> = rgb_str.split(',').collect();
    let [r, g, b] = parts.as_slice() else {
        return Err(format!(
            "Value '{rgb_str}' is an invalid RGB colour. It must be a comma separated value with 3 integers from 0 to 255 (ie: '255, 0, 155').",
        ));
    };

    match (
        r.trim().parse::<u8>(),
        g.trim().parse::<u8>(),
        b.trim().parse::<u8>(),
    ) {
        (Ok(r), Ok(g), Ok(b)) => Ok(Color::Rgb(r, g, b)),
        _ => Err(format!(
            "Value '{rgb_str}' contained invalid RGB values. It must be a comma separated value with 3 integers from 0 to 255 (ie: '255, 0, 155').",
        )),
    }
}

fn convert_name_to_colour(color_name: &str) -> Result<Color, String> {
    match color_name.to_lowercase().trim() {
        "reset" => Ok(Color::Reset),
        "black" => Ok(Color::Black),
        "red" => Ok(Color::Red),
        "green" => Ok(Color::Green),
        "yellow" => Ok(Color::Yellow),
        "blue" => Ok(Color::Blue),
        "magenta" => Ok(Color::Magenta),
        "cyan" => Ok(Color::Cyan),
        "gray" | "grey" => Ok(Color::Gray),
        "darkgray" | "darkgrey" | "dark gray" | "dark grey" => Ok(Color::DarkGray),
        "lightred" | "light red" => Ok(Color::LightRed),
        "lightgreen" | "light green" => Ok(Color::LightGreen),
        "lightyellow" | "light yellow" => Ok(Color::LightYellow),
        "lightblue" | "light blue" => Ok(Color::LightBlue),
        "lightmagenta" | "light magenta" => Ok(Color::LightMagenta),
        "lightcyan" | "light cyan" => Ok(Color::LightCyan),
        "white" => Ok(Color::White),
        _ => Err(format!(
            "'{color_name}' is an invalid named color. Supported names are reset, black, red, \
            green, yellow, blue, magenta, cyan, gray, dark gray, light red, light green, \
            light yellow, light blue, light magenta, light cyan and white. Hex colors or RGB \
            color codes are also valid."
        )),
    }
}

/// Sets the foreground of `$style` from `$config.$field` if it is set,
/// returning an error naming `styles.$field` if the colour is invalid.
macro_rules! set_colour {
    ($style:expr, $config:expr, $field:ident) => {
        if let Some(colour) = &$config.$field {
            $style = $style.fg(
                crate::options::config::style::utils::str_to_colour(&colour.0).map_err(|err| {
                    crate::options::OptionError::config(format!(
                        "Please update 'styles.{}' in your config file. {err}",
                        stringify!($field)
                    ))
                })?,
            );
        }
    };
}

pub(super) use set_colour;
