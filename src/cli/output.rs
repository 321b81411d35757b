use std::io::Write;

use anstyle::{RgbColor, Style};

use crate::config::Config;
use crate::error::Result;

use tincture::Color;

pub struct Output<'a> {
    pub handle: &'a mut dyn Write,
}

impl Output<'_> {
    pub fn new(handle: &mut dyn Write) -> Output {
        Output { handle }
    }

    fn swatch(&mut self, config: &Config, color: &Color) -> Result<()> {
        let [r, g, b] = color.to_rgb_float().to_u8();
        let style = Style::new().bg_color(Some(RgbColor(r, g, b).into()));

        write!(
            self.handle,
            "{pad}{on}{panel}{off}{pad}",
            pad = " ".repeat(config.padding),
            on = style.render(),
            panel = " ".repeat(config.swatch_width),
            off = style.render_reset(),
        )?;

        Ok(())
    }

    /// Print the textual representation of a color, preceded by a color swatch in
    /// interactive mode.
    pub fn show_color(&mut self, config: &Config, color: &Color, text: &str) -> Result<()> {
        if config.interactive_mode {
            self.swatch(config, color)?;
        }
        writeln!(self.handle, "{}", text)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_output_has_no_escape_codes() {
        let config = Config {
            padding: 2,
            swatch_width: 6,
            interactive_mode: false,
        };
        let mut buffer = Vec::new();
        Output::new(&mut buffer)
            .show_color(&config, &Color::red(), "#ff0000")
            .unwrap();
        assert_eq!(b"#ff0000\n".to_vec(), buffer);
    }

    #[test]
    fn interactive_output_starts_with_swatch() {
        let config = Config {
            padding: 1,
            swatch_width: 2,
            interactive_mode: true,
        };
        let mut buffer = Vec::new();
        Output::new(&mut buffer)
            .show_color(&config, &Color::red(), "#ff0000")
            .unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with(" \x1b[48;2;255;0;0m  \x1b[0m "));
        assert!(text.ends_with("#ff0000\n"));
    }
}
