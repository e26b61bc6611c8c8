// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Counter screen launcher
//!
//! With the `gui` feature the page opens in a window. Otherwise it is printed
//! as HTML after an optional number of clicks: `counter-screen [CLICKS]`.

#[cfg(feature = "gui")]
mod gui;

use counter_screen::{Role, Screen};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let screen = Screen::create();
    let (button, _) = screen.tree().by_role(Role::Button, None)?;

    #[cfg(feature = "gui")]
    {
        gui::run(screen, button)?;
    }

    #[cfg(not(feature = "gui"))]
    {
        let clicks: u64 = match std::env::args().nth(1) {
            Some(arg) => arg.parse()?,
            None => 0,
        };
        for _ in 0..clicks {
            screen.click(button)?;
        }
        println!("{}", screen.tree());
        screen.dispose();
    }

    Ok(())
}
