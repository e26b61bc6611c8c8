// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Windowed frontend

use counter_screen::{page, NodeId, Screen, TextMatch};
use kas::class::SetAccel;
use kas::event::{Manager, VoidMsg, VoidResponse};
use kas::macros::make_widget;
use kas::prelude::*;
use kas::widgets::{Label, TextButton, Window};

/// Disposes the screen when the window is dropped
#[derive(Debug)]
struct Mounted(Option<Screen>);

impl Drop for Mounted {
    fn drop(&mut self) {
        if let Some(screen) = self.0.take() {
            screen.dispose();
        }
    }
}

fn text_of(screen: &Screen, m: TextMatch) -> String {
    screen
        .tree()
        .by_text(m)
        .map(|(_, el)| el.text_content())
        .unwrap_or_default()
}

fn label_of(screen: &Screen, id: NodeId) -> String {
    screen
        .tree()
        .get(id)
        .map(|el| el.accessible_name())
        .unwrap_or_default()
}

/// Show `screen` in a window; `button` is the counter control
///
/// The window owns `screen`. It is disposed when the toolkit drops the window
/// on exit, or when the toolkit fails to start.
pub fn run(screen: Screen, button: NodeId) -> Result<(), kas_wgpu::Error> {
    let links = format!(
        "{}  ·  {}  ·  {}",
        page::VITE_HREF,
        page::REACT_HREF,
        page::PDF_HREF
    );
    let label = label_of(&screen, button);
    let card = text_of(&screen, TextMatch::Contains("changed from local"));
    let docs = text_of(&screen, TextMatch::Contains("Click on the Vite"));

    let window = Window::new(
        page::TITLE,
        make_widget! {
            #[widget]
            #[layout(column)]
            #[handler(msg = VoidMsg)]
            struct {
                #[widget] _ = Label::new(page::TITLE),
                #[widget(handler = count)] counter: TextButton<()> = TextButton::new_msg(label, ()),
                #[widget] _ = Label::new(card),
                #[widget] _ = Label::new(docs),
                #[widget] _ = Label::new(links),
                screen: Mounted = Mounted(Some(screen)),
                button: NodeId = button,
            }
            impl {
                fn count(&mut self, mgr: &mut Manager, _: ()) -> VoidResponse {
                    if let Some(screen) = self.screen.0.as_ref() {
                        match screen.click(self.button) {
                            Ok(_) => {
                                *mgr |= self.counter.set_accel(label_of(screen, self.button));
                            }
                            Err(err) => log::warn!("click failed: {}", err),
                        }
                    }
                    Response::None
                }
            }
        },
    );

    let theme = kas_wgpu::theme::ShadedTheme::new();
    let mut toolkit = kas_wgpu::Toolkit::new(theme)?;
    toolkit.add(window)?;
    toolkit.run()
}
