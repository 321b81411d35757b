use crate::commands::prelude::*;

use tincture::{Color, Format, Options, Scalar, Space};

pub struct MixCommand;

/// Read a color given as `r,g,b` with components between 0.0 and 1.0.
pub fn parse_rgb_triple(arg: &str) -> Result<Color> {
    let components = arg
        .split(',')
        .map(|part| part.trim().parse::<Scalar>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|_| CliError::ColorArgument(arg.to_owned()))?;

    match components.as_slice() {
        [r, g, b] => Ok(Color::from_rgb_float(*r, *g, *b)),
        _ => Err(CliError::ColorArgument(arg.to_owned())),
    }
}

impl GenericCommand for MixCommand {
    fn run(&self, out: &mut Output, matches: &ArgMatches, config: &Config) -> Result<()> {
        let first = parse_rgb_triple(matches.get_one::<String>("first").expect("required argument"))?;
        let second =
            parse_rgb_triple(matches.get_one::<String>("second").expect("required argument"))?;

        let mut options = Options::new();
        if let Some(ratio) = matches.get_one::<Scalar>("ratio") {
            options = options.with_ratio(*ratio);
        }
        if let Some(name) = matches.get_one::<String>("space") {
            options = options.in_space(name.parse::<Space>()?);
        }

        let mixed = first.interpolate(&second, options)?;

        let format_type = matches
            .get_one::<String>("format")
            .map(|f| f.to_lowercase())
            .unwrap_or_else(|| "hex".into());
        let text = match format_type.as_ref() {
            "hex" => mixed.to_rgb_hex_string(true),
            name => {
                let space = name.parse::<Space>()?;
                mixed
                    .to_space_string(space, Format::Spaces)
                    .unwrap_or_else(|| unreachable!("Unknown format type"))
            }
        };

        out.show_color(config, &mixed, &text)
    }
}
