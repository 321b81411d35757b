use clap::{builder, crate_description, crate_name, crate_version, value_parser, Arg, Command};

const SPACE_NAMES: &[&str] = &["rgb", "hsv", "hsl", "luv", "hcl", "lab", "cymk"];
const FORMAT_NAMES: &[&str] = &["hex", "rgb", "hsv", "hsl", "luv", "lab"];
const DEFAULT_FORMAT: &str = "hex";

pub fn build_cli() -> Command {
    let color_arg_help = "Colors are given as three comma-separated sRGB components between \
                          0.0 and 1.0, such as '1,0.5,0'.";

    Command::new(crate_name!())
        .version(crate_version!())
        .about(crate_description!())
        .color(clap::ColorChoice::Auto)
        .dont_collapse_args_in_usage(true)
        .max_term_width(100)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("mix")
                .about("Mix two colors in the given color space")
                .long_about(color_print::cstr!(
                    "Create a new color by interpolating between two colors in the given \
                     color space. Hues are blended along the color circle in HSV and HSL, \
                     all other components linearly.\n\n\
                     <green,bold>Example:</>\
                     \n  <cyan,bold>tincture mix --space=HSL 1,0,0 0,0,1</>\
                     \n  <cyan,bold>tincture mix --ratio=0.25 --format=lab 0.9,0.9,0.2 0.1,0.2,0.6</>"
                ))
                .arg(
                    Arg::new("space")
                        .long("space")
                        .short('s')
                        .value_name("NAME")
                        .help("Color space in which to interpolate [default: Luv]")
                        .value_parser(builder::PossibleValuesParser::new(SPACE_NAMES))
                        .ignore_case(true)
                        .env("TINCTURE_SPACE"),
                )
                .arg(
                    Arg::new("ratio")
                        .long("ratio")
                        .short('r')
                        .value_name("RATIO")
                        .help("Position between the two colors [0.0 is FIRST, 1.0 is SECOND]")
                        .long_help(
                            "Position between the two colors: 0.0 yields FIRST, 1.0 yields \
                             SECOND. Values outside this range extrapolate.",
                        )
                        .value_parser(value_parser!(f64))
                        .allow_negative_numbers(true)
                        .default_value("0.5"),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .value_name("FORMAT")
                        .help("Output format of the mixed color")
                        .value_parser(builder::PossibleValuesParser::new(FORMAT_NAMES))
                        .ignore_case(true)
                        .default_value(DEFAULT_FORMAT),
                )
                .arg(
                    Arg::new("first")
                        .value_name("FIRST")
                        .help(color_arg_help)
                        .required(true),
                )
                .arg(
                    Arg::new("second")
                        .value_name("SECOND")
                        .help(color_arg_help)
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("spaces")
                .about("Show the color spaces available for interpolation"),
        )
        .arg(
            Arg::new("color-mode")
                .long("color-mode")
                .short('m')
                .value_name("MODE")
                .help("Specify the terminal color mode: 24bit, off, *auto*")
                .value_parser(["24bit", "off", "auto"])
                .env("TINCTURE_COLOR_MODE")
                .default_value(if output_vt100::try_init().is_ok() {"auto"} else {"off"})
                .hide_possible_values(true)
                .hide_default_value(true)
                .global(true),
        )
}

#[test]
fn verify_cmd() {
    build_cli().debug_assert();
}
