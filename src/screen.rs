// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Screen lifecycle and event dispatch

use crate::content::Content;
use crate::error::ContractViolation;
use crate::event::{Event, Key, Response};
use crate::page;
use crate::render::RenderBinding;
use crate::state::CounterState;
use crate::tree::{NodeId, RenderTree};
use log::{debug, trace, warn};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

#[derive(Debug)]
struct Inner {
    binding: RenderBinding,
    focus: Option<NodeId>,
}

impl Inner {
    fn dispatch(&mut self, target: NodeId, event: Event) -> Result<Response, ContractViolation> {
        let tree = self.binding.tree();
        let el = tree.get(target).ok_or(ContractViolation::UnknownNode(target))?;
        trace!("dispatch {:?} to {} ({:?})", event, target, el.role);

        Ok(match event {
            Event::Click => {
                let count = self.binding.on_activate(target)?;
                if let Some(count) = count {
                    debug!("counter is now {}", count);
                }
                count.is_some().into()
            }
            Event::Focus => {
                if el.is_focusable() {
                    self.focus = Some(target);
                    Response::Used
                } else {
                    Response::Unused
                }
            }
            Event::Blur => {
                if self.focus == Some(target) {
                    self.focus = None;
                    Response::Used
                } else {
                    Response::Unused
                }
            }
            Event::KeyDown(Key::Tab) => {
                let next = tree
                    .elements()
                    .filter(|(_, el)| el.is_focusable())
                    .map(|(id, _)| id)
                    .find(|id| *id > target)
                    .or_else(|| {
                        tree.elements()
                            .find(|(_, el)| el.is_focusable())
                            .map(|(id, _)| id)
                    });
                self.focus = next;
                next.is_some().into()
            }
            // Keys never activate; only clicks reach the binding
            Event::KeyDown(_) => Response::Unused,
        })
    }
}

/// A mounted screen
///
/// Created with [`Screen::create`] and released with [`Screen::dispose`].
/// Each screen owns an independent counter.
#[derive(Debug)]
pub struct Screen {
    inner: Rc<RefCell<Inner>>,
}

impl Screen {
    /// Mount the landing page with the counter at zero
    pub fn create() -> Self {
        Self::with_content(page::app())
    }

    /// Mount arbitrary content with the counter at zero
    pub fn with_content(content: Vec<Content>) -> Self {
        let binding = RenderBinding::bind(content, CounterState::new());
        debug!("screen mounted");
        Screen {
            inner: Rc::new(RefCell::new(Inner {
                binding,
                focus: None,
            })),
        }
    }

    /// Current render tree
    pub fn tree(&self) -> Rc<RenderTree> {
        self.inner.borrow().binding.tree()
    }

    /// Current counter value
    pub fn count(&self) -> u64 {
        self.inner.borrow().binding.state().value()
    }

    /// The element holding keyboard focus, if any
    pub fn focused(&self) -> Option<NodeId> {
        self.inner.borrow().focus
    }

    /// Dispatch `event` to element `target`
    ///
    /// Runs to completion: the tree is up to date when this returns.
    pub fn dispatch(&self, target: NodeId, event: Event) -> Result<Response, ContractViolation> {
        dispatch(&self.inner, target, event)
    }

    /// Shortcut for dispatching [`Event::Click`]
    pub fn click(&self, target: NodeId) -> Result<Response, ContractViolation> {
        self.dispatch(target, Event::Click)
    }

    /// A handle for event sources living outside the screen's owner
    ///
    /// Handles do not keep the screen alive; once it is disposed they return
    /// [`ContractViolation::Disposed`].
    pub fn handle(&self) -> Handle {
        Handle {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Tear down the screen, detaching the activation handler
    pub fn dispose(self) {
        let mut inner = self.inner.borrow_mut();
        inner.binding.unbind();
        inner.focus = None;
        debug!("screen disposed at count {}", inner.binding.state().value());
    }
}

/// Weak reference to a [`Screen`]
#[derive(Clone, Debug)]
pub struct Handle {
    inner: Weak<RefCell<Inner>>,
}

impl Handle {
    fn upgrade(&self) -> Result<Rc<RefCell<Inner>>, ContractViolation> {
        self.inner.upgrade().ok_or_else(|| {
            warn!("use of handle after dispose");
            ContractViolation::Disposed
        })
    }

    /// Whether the screen is still mounted
    pub fn is_live(&self) -> bool {
        self.inner.strong_count() > 0
    }

    /// Current render tree
    pub fn tree(&self) -> Result<Rc<RenderTree>, ContractViolation> {
        let inner = self.upgrade()?;
        let tree = inner.borrow().binding.tree();
        Ok(tree)
    }

    /// See [`Screen::dispatch`]
    pub fn dispatch(&self, target: NodeId, event: Event) -> Result<Response, ContractViolation> {
        let inner = self.upgrade()?;
        dispatch(&inner, target, event)
    }

    /// See [`Screen::click`]
    pub fn click(&self, target: NodeId) -> Result<Response, ContractViolation> {
        self.dispatch(target, Event::Click)
    }
}

fn dispatch(
    inner: &RefCell<Inner>,
    target: NodeId,
    event: Event,
) -> Result<Response, ContractViolation> {
    let mut inner = inner.try_borrow_mut().map_err(|_| {
        warn!("re-entrant dispatch of {:?}", event);
        ContractViolation::Reentrant
    })?;
    inner.dispatch(target, event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Role;

    fn find(screen: &Screen, role: Role) -> NodeId {
        screen
            .tree()
            .elements()
            .find(|(_, el)| el.role == role)
            .map(|(id, _)| id)
            .unwrap()
    }

    #[test]
    fn focus_only_focusable() {
        let screen = Screen::create();
        let button = find(&screen, Role::Button);
        let para = find(&screen, Role::Paragraph);

        assert_eq!(screen.dispatch(para, Event::Focus), Ok(Response::Unused));
        assert_eq!(screen.focused(), None);
        assert_eq!(screen.dispatch(button, Event::Focus), Ok(Response::Used));
        assert_eq!(screen.focused(), Some(button));
        assert_eq!(screen.dispatch(button, Event::Blur), Ok(Response::Used));
        assert_eq!(screen.focused(), None);
    }

    #[test]
    fn enter_does_not_increment() {
        let screen = Screen::create();
        let button = find(&screen, Role::Button);
        screen.dispatch(button, Event::Focus).unwrap();
        let r = screen.dispatch(button, Event::KeyDown(Key::Enter));
        assert_eq!(r, Ok(Response::Unused));
        assert_eq!(screen.count(), 0);
        assert_eq!(screen.focused(), Some(button));
    }

    #[test]
    fn tab_cycles_focusable() {
        let screen = Screen::create();
        let tree = screen.tree();
        let order: Vec<NodeId> = tree
            .elements()
            .filter(|(_, el)| el.is_focusable())
            .map(|(id, _)| id)
            .collect();
        // two logo links, the button, the document link
        assert_eq!(order.len(), 4);

        let mut at = order[0];
        for expected in order.iter().skip(1).chain(order.first()) {
            screen.dispatch(at, Event::KeyDown(Key::Tab)).unwrap();
            assert_eq!(screen.focused(), Some(*expected));
            at = *expected;
        }
    }

    #[test]
    fn click_reports_response() {
        let screen = Screen::create();
        let button = find(&screen, Role::Button);
        let link = find(&screen, Role::Link);
        assert_eq!(screen.click(button), Ok(Response::Used));
        assert_eq!(screen.click(link), Ok(Response::Unused));
        assert_eq!(screen.count(), 1);
    }

    #[test]
    fn handle_is_weak() {
        let screen = Screen::create();
        let handle = screen.handle();
        assert!(handle.is_live());
        let button = find(&screen, Role::Button);
        handle.click(button).unwrap();
        assert_eq!(screen.count(), 1);

        screen.dispose();
        assert!(!handle.is_live());
        assert_eq!(handle.click(button), Err(ContractViolation::Disposed));
        assert_eq!(handle.tree(), Err(ContractViolation::Disposed));
    }

    #[test]
    fn handle_dispatches_while_live() {
        let screen = Screen::create();
        let handle = screen.handle();
        let button = find(&screen, Role::Button);
        assert_eq!(handle.dispatch(button, Event::Focus), Ok(Response::Used));
        assert_eq!(handle.dispatch(button, Event::Click), Ok(Response::Used));
        assert_eq!(screen.focused(), Some(button));
        assert_eq!(handle.tree().map(|tree| tree.count()), Ok(1));
    }

    #[test]
    fn reentrant_dispatch_is_rejected() {
        let screen = Screen::create();
        let button = find(&screen, Role::Button);
        let _guard = screen.inner.borrow_mut();
        assert_eq!(screen.click(button), Err(ContractViolation::Reentrant));
    }
}
