use crate::domain::ports::ElementLocator;
use std::sync::Mutex;

#[derive(Debug, Clone, Default)]
struct ElementState {
    name: Option<String>,
    value: String,
    text: String,
    visible: bool,
    activations: usize,
}

/// In-memory page surface. Elements are keyed by the selector they were
/// registered under; `by_name` walks entries in insertion order, matching
/// document order for the first-named-element lookup. Interior mutability
/// keeps the locator usable behind a shared reference, so a test or the CLI
/// can hold an `Arc<MemoryPage>` and inspect the state the controller left
/// behind.
#[derive(Debug, Default)]
pub struct MemoryPage {
    state: Mutex<Vec<(String, ElementState)>>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a visible input holding `value`.
    pub fn with_input(self, selector: &str, value: &str) -> Self {
        self.insert(
            selector,
            ElementState {
                value: value.to_string(),
                visible: true,
                ..Default::default()
            },
        );
        self
    }

    /// Register a visible input that also carries a `name` attribute.
    pub fn with_named_input(self, selector: &str, name: &str, value: &str) -> Self {
        self.insert(
            selector,
            ElementState {
                name: Some(name.to_string()),
                value: value.to_string(),
                visible: true,
                ..Default::default()
            },
        );
        self
    }

    /// Register a visible element with no value.
    pub fn with_element(self, selector: &str) -> Self {
        self.insert(
            selector,
            ElementState {
                visible: true,
                ..Default::default()
            },
        );
        self
    }

    /// Register an element that starts hidden, like a loading indicator.
    pub fn with_hidden_element(self, selector: &str) -> Self {
        self.insert(selector, ElementState::default());
        self
    }

    fn insert(&self, selector: &str, element: ElementState) {
        let mut state = self.state.lock().unwrap();
        state.push((selector.to_string(), element));
    }

    pub fn value_of(&self, selector: &str) -> Option<String> {
        self.read(selector, |e| e.value.clone())
    }

    /// Display text last written to the element.
    pub fn text_of(&self, selector: &str) -> Option<String> {
        self.read(selector, |e| e.text.clone())
    }

    pub fn is_visible(&self, selector: &str) -> bool {
        self.read(selector, |e| e.visible).unwrap_or(false)
    }

    pub fn activation_count(&self, selector: &str) -> usize {
        self.read(selector, |e| e.activations).unwrap_or(0)
    }

    fn read<R>(&self, selector: &str, f: impl FnOnce(&ElementState) -> R) -> Option<R> {
        let state = self.state.lock().unwrap();
        state
            .iter()
            .find(|(key, _)| key == selector)
            .map(|(_, element)| f(element))
    }

    fn write(&self, selector: &str, f: impl FnOnce(&mut ElementState)) {
        let mut state = self.state.lock().unwrap();
        if let Some((_, element)) = state.iter_mut().find(|(key, _)| key == selector) {
            f(element);
        }
    }
}

impl ElementLocator for MemoryPage {
    type Handle = String;

    fn by_selector(&self, selector: &str) -> Option<String> {
        let state = self.state.lock().unwrap();
        state
            .iter()
            .find(|(key, _)| key == selector)
            .map(|(key, _)| key.clone())
    }

    fn by_name(&self, name: &str) -> Option<String> {
        let state = self.state.lock().unwrap();
        state
            .iter()
            .find(|(_, element)| element.name.as_deref() == Some(name))
            .map(|(key, _)| key.clone())
    }

    fn value(&self, handle: &String) -> String {
        self.read(handle, |e| e.value.clone()).unwrap_or_default()
    }

    fn set_value(&self, handle: &String, value: &str) {
        self.write(handle, |e| e.value = value.to_string());
    }

    fn set_content(&self, handle: &String, text: &str) {
        self.write(handle, |e| e.text = text.to_string());
    }

    fn set_visible(&self, handle: &String, visible: bool) {
        self.write(handle, |e| e.visible = visible);
    }

    fn activate(&self, handle: &String) {
        self.write(handle, |e| e.activations += 1);
    }
}
