//! The fixed investigation script
//!
//! A fixed playthrough of the backyard mystery, used by the demo
//! subcommand and by the deterministic end-to-end tests.

use crate::game::command::Command;

/// Opening narration for the backyard mystery
pub const INTRO: &str = "You are in your backyard where a commotion was heard. \
Your goal is to find out what happened by investigating the surrounding areas. \
You spot footprints leading toward the neighbor's garden. The items you find \
and the choices you make will reveal what took place.";

/// The fixed demo playthrough
pub fn demo_script() -> Vec<Command> {
    vec![
        Command::Grab("magnifying glass".to_string()),
        Command::Grab("drone".to_string()),
        Command::Examine("backyard".to_string()),
        Command::Examine("pet house".to_string()),
        Command::Rest,
        Command::Use("bat".to_string()),
        Command::Use("drone".to_string()),
        Command::Walk("north".to_string()),
        Command::Walk("south".to_string()),
        Command::Fly(5, 5),
        Command::Rest,
        Command::Shrink,
        Command::Grow,
        Command::Undo,
    ]
}
