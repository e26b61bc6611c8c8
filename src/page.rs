// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! The landing page

use crate::content::{Content, Descriptor};
use crate::tree::{Action, Role};

pub const VITE_HREF: &str = "https://vite.dev";
pub const REACT_HREF: &str = "https://react.dev";
pub const VITE_LOGO_SRC: &str = "https://img.icons8.com/?size=256&id=V1Ja402KSwyz&format=png";
pub const REACT_LOGO_SRC: &str = "https://img.icons8.com/?size=256&id=aUZxT3Erwill&format=png";
pub const PDF_HREF: &str = "/Python Cheat Sheet.pdf";

pub const TITLE: &str = "Vite + React + Rohit";
pub const PDF_LINK_TEXT: &str = "Click here to open the pdf";

/// Label of the counter button for `count`
pub fn counter_label(count: u64) -> String {
    format!("count is {}", count)
}

fn logo(href: &str, src: &str, class: &str, alt: &str) -> Descriptor {
    Descriptor::new(Role::Link)
        .with_attr("href", href)
        .with_attr("target", "_blank")
        .with_child(
            Descriptor::new(Role::Image)
                .with_attr("src", src)
                .with_attr("class", class)
                .with_attr("alt", alt),
        )
}

/// Content descriptors of the page, in document order
pub fn app() -> Vec<Content> {
    vec![
        Descriptor::new(Role::Group)
            .with_child(logo(VITE_HREF, VITE_LOGO_SRC, "logo", "Vite logo"))
            .with_child(logo(REACT_HREF, REACT_LOGO_SRC, "logo react", "React logo"))
            .into(),
        Descriptor::new(Role::heading(1)).with_text(TITLE).into(),
        Descriptor::new(Role::Group)
            .with_attr("class", "card")
            .with_child(
                Descriptor::new(Role::Button)
                    .with_text("count is ")
                    .with_count()
                    .on_activate(Action::Increment),
            )
            .with_child(
                Descriptor::new(Role::Paragraph)
                    .with_text("changed from local ")
                    .with_child(Descriptor::new(Role::Code).with_text("processing through"))
                    .with_text("test case and deployed directly"),
            )
            .into(),
        Descriptor::new(Role::Paragraph)
            .with_attr("class", "read-the-docs")
            .with_text("Click on the Vite and React logos to learn more")
            .into(),
        Descriptor::new(Role::Link)
            .with_attr("href", PDF_HREF)
            .with_attr("target", "_blank")
            .with_attr("rel", "noopener noreferrer")
            .with_child(Descriptor::new(Role::heading(1)).with_text(PDF_LINK_TEXT))
            .into(),
    ]
}
