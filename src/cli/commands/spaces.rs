use crate::commands::prelude::*;

use tincture::Space;

pub struct SpacesCommand;

const SPACES: &[(Space, &str)] = &[
    (Space::Rgb, "linear blend of device RGB components"),
    (Space::Hsv, "hue along the color circle, saturation and value clamped"),
    (Space::Hsl, "hue along the color circle, saturation and lightness clamped"),
    (Space::Luv, "linear blend of CIE L*u*v* components (default)"),
    (Space::Hcl, "alias of Luv"),
    (Space::Lab, "linear blend of CIE L*a*b* components"),
    (Space::Cymk, "reserved, not supported"),
];

impl GenericCommand for SpacesCommand {
    fn run(&self, out: &mut Output, _: &ArgMatches, _: &Config) -> Result<()> {
        for (space, description) in SPACES {
            writeln!(
                out.handle,
                "{:<6}{}",
                space.to_string().to_lowercase(),
                description
            )?;
        }

        Ok(())
    }
}
