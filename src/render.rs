// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Rendering and the state binding

use crate::content::{Content, Descriptor};
use crate::error::ContractViolation;
use crate::state::{CounterState, ObserverId};
use crate::tree::{Action, Element, Node, NodeId, RenderTree};
use log::trace;
use std::cell::RefCell;
use std::rc::Rc;

/// Render `content` for counter value `count`
///
/// This is a pure function: equal inputs give equal trees. Adjacent text runs
/// are merged, so an element's text is a single node.
pub fn render(content: &[Content], count: u64) -> RenderTree {
    RenderTree::new(render_nodes(content, count), count)
}

fn render_nodes(content: &[Content], count: u64) -> Vec<Node> {
    let mut nodes = Vec::with_capacity(content.len());
    for item in content {
        match item {
            Content::Element(d) => nodes.push(Node::Element(render_element(d, count))),
            Content::Text(text) => push_text(&mut nodes, text),
            Content::Count => push_text(&mut nodes, &count.to_string()),
        }
    }
    nodes
}

fn render_element(d: &Descriptor, count: u64) -> Element {
    Element {
        role: d.role,
        attributes: d.attributes.clone(),
        children: render_nodes(&d.children, count),
        action: d.action,
    }
}

fn push_text(nodes: &mut Vec<Node>, text: &str) {
    if let Some(Node::Text(last)) = nodes.last_mut() {
        last.push_str(text);
    } else {
        nodes.push(Node::Text(text.to_string()));
    }
}

/// Keeps a [`RenderTree`] in step with a [`CounterState`]
///
/// The binding owns the state it observes, so the only way to increment it is
/// through [`RenderBinding::on_activate`]. On binding, an observer is
/// registered which recomputes the tree after each transition; the tree is
/// therefore current as soon as the transition returns.
#[derive(Debug)]
pub struct RenderBinding {
    state: CounterState,
    content: Rc<[Content]>,
    tree: Rc<RefCell<Rc<RenderTree>>>,
    observer: Option<ObserverId>,
}

impl RenderBinding {
    /// Take ownership of `state`, render the initial tree and observe it
    pub fn bind(content: Vec<Content>, mut state: CounterState) -> Self {
        let content: Rc<[Content]> = Rc::from(content);
        let tree = Rc::new(RefCell::new(Rc::new(render(&content, state.value()))));

        let observer = {
            let content = content.clone();
            let tree = tree.clone();
            state.observe(move |count| {
                trace!("re-render for count {}", count);
                *tree.borrow_mut() = Rc::new(render(&content, count));
            })
        };

        RenderBinding {
            state,
            content,
            tree,
            observer: Some(observer),
        }
    }

    /// The observed state
    pub fn state(&self) -> &CounterState {
        &self.state
    }

    /// The static content this binding renders
    pub fn content(&self) -> &[Content] {
        &self.content
    }

    /// The current tree
    pub fn tree(&self) -> Rc<RenderTree> {
        self.tree.borrow().clone()
    }

    /// Handle activation of element `target`
    ///
    /// The action of `target` or its nearest ancestor carrying one is applied
    /// to the state. Returns the new counter value, or `None` when no element
    /// on the path is activatable.
    pub fn on_activate(&mut self, target: NodeId) -> Result<Option<u64>, ContractViolation> {
        if self.observer.is_none() {
            return Err(ContractViolation::Disposed);
        }

        let tree = self.tree();
        let path = tree
            .ancestry(target)
            .ok_or(ContractViolation::UnknownNode(target))?;
        let action = path
            .iter()
            .filter_map(|id| tree.get(*id))
            .find_map(|el| el.action);

        Ok(action.map(|action| match action {
            Action::Increment => {
                let count = self.state.increment();
                debug_assert_eq!(self.tree().count(), count);
                count
            }
        }))
    }

    /// Detach the observer
    ///
    /// Further activations fail with [`ContractViolation::Disposed`]. Returns
    /// false if already unbound.
    pub fn unbind(&mut self) -> bool {
        match self.observer.take() {
            Some(id) => self.state.unobserve(id),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page;
    use crate::tree::Role;

    fn button_id(tree: &RenderTree) -> NodeId {
        tree.elements()
            .find(|(_, el)| el.role == Role::Button)
            .map(|(id, _)| id)
            .unwrap()
    }

    fn bound() -> RenderBinding {
        RenderBinding::bind(page::app(), CounterState::new())
    }

    #[test]
    fn label_text_is_one_node() {
        let tree = render(&page::app(), 42);
        let id = button_id(&tree);
        let button = tree.get(id).unwrap();
        assert_eq!(button.children, vec![Node::Text("count is 42".to_string())]);
    }

    #[test]
    fn render_is_pure() {
        let content = page::app();
        assert_eq!(render(&content, 7), render(&content, 7));
        assert_ne!(render(&content, 7), render(&content, 8));
    }

    #[test]
    fn binding_tracks_state() {
        let mut binding = bound();
        let id = button_id(&binding.tree());

        assert_eq!(binding.on_activate(id), Ok(Some(1)));
        assert_eq!(binding.state().value(), 1);
        assert_eq!(binding.tree().count(), 1);
        assert_eq!(binding.tree().get(id).unwrap().own_text(), "count is 1");
        assert_eq!(*binding.tree(), render(binding.content(), 1));
    }

    #[test]
    fn bind_renders_existing_value() {
        let mut state = CounterState::new();
        state.increment();
        state.increment();
        let mut binding = RenderBinding::bind(page::app(), state);
        let id = button_id(&binding.tree());
        assert_eq!(binding.tree().count(), 2);

        assert_eq!(binding.on_activate(id), Ok(Some(3)));
        assert_eq!(binding.tree().count(), binding.state().value());
    }

    #[test]
    fn bindings_own_separate_state() {
        let mut a = bound();
        let b = bound();
        let id = button_id(&a.tree());
        a.on_activate(id).unwrap();
        a.on_activate(id).unwrap();

        assert_eq!(a.state().value(), 2);
        assert_eq!(a.tree().count(), 2);
        assert_eq!(b.state().value(), 0);
        assert_eq!(b.tree().get(id).unwrap().own_text(), "count is 0");
    }

    #[test]
    fn inert_elements() {
        let mut binding = bound();
        let tree = binding.tree();
        for (id, el) in tree.elements() {
            if el.role != Role::Button {
                assert_eq!(binding.on_activate(id), Ok(None));
            }
        }
        assert_eq!(binding.state().value(), 0);
    }

    #[test]
    fn unknown_node() {
        let mut binding = bound();
        let id = NodeId::from_index(1000);
        assert_eq!(
            binding.on_activate(id),
            Err(ContractViolation::UnknownNode(id))
        );
    }

    #[test]
    fn unbound_binding_rejects_activation() {
        let mut binding = bound();
        let id = button_id(&binding.tree());
        assert!(binding.unbind());
        assert!(!binding.unbind());
        assert_eq!(binding.state().observer_count(), 0);
        assert_eq!(binding.on_activate(id), Err(ContractViolation::Disposed));
        assert_eq!(binding.state().value(), 0);
    }
}
