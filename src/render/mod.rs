//! Render targets for the typewriter
//!
//! A render target receives the full displayed string on every step. The
//! in-memory targets here are used by the TUI and by tests; `line` writes to
//! a terminal or pipe.

pub mod line;

pub use line::{LineMode, LineWriter};

/// Something that can display the typewriter's current text.
pub trait RenderTarget {
    /// Replace the displayed text with `text`.
    fn render(&mut self, text: &str);
}

/// Keeps only the latest value.
impl RenderTarget for String {
    fn render(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }
}

/// Records every value in order.
impl RenderTarget for Vec<String> {
    fn render(&mut self, text: &str) {
        self.push(text.to_string());
    }
}

impl<T: RenderTarget + ?Sized> RenderTarget for &mut T {
    fn render(&mut self, text: &str) {
        (**self).render(text);
    }
}

impl<T: RenderTarget + ?Sized> RenderTarget for Box<T> {
    fn render(&mut self, text: &str) {
        (**self).render(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_target_replaces_content() {
        let mut s = String::from("old");
        s.render("new");
        assert_eq!(s, "new");
        s.render("");
        assert!(s.is_empty());
    }

    #[test]
    fn vec_target_records_each_value() {
        let mut v: Vec<String> = Vec::new();
        v.render("a");
        v.render("ab");
        assert_eq!(v, vec!["a", "ab"]);
    }

    #[test]
    fn boxed_and_borrowed_targets_forward() {
        let mut inner = String::new();
        {
            let mut borrowed = &mut inner;
            RenderTarget::render(&mut borrowed, "via ref");
        }
        assert_eq!(inner, "via ref");

        let mut boxed: Box<dyn RenderTarget> = Box::new(Vec::<String>::new());
        boxed.render("x");
    }
}
