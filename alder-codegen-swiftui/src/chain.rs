//! Swift modifier chain builder for fluent view expressions.

/// A modifier call in a chain.
#[derive(Debug, Clone)]
struct Call {
    name: String,
    arg: Option<String>,
}

/// Builder for Swift modifier chains (e.g., `Text("hi").font(.title).bold()`).
#[derive(Debug, Clone)]
pub struct ModifierChain {
    base: String,
    base_args: Vec<String>,
    calls: Vec<Call>,
}

impl ModifierChain {
    /// Create a new chain starting with a call to the given view type.
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            base_args: Vec::new(),
            calls: Vec::new(),
        }
    }

    /// Add an argument to the base call.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.base_args.push(arg.into());
        self
    }

    /// Add a modifier call with one argument.
    pub fn call(mut self, name: impl Into<String>, arg: impl Into<String>) -> Self {
        self.calls.push(Call {
            name: name.into(),
            arg: Some(arg.into()),
        });
        self
    }

    /// Add a zero-argument modifier call.
    pub fn call_empty(mut self, name: impl Into<String>) -> Self {
        self.calls.push(Call {
            name: name.into(),
            arg: None,
        });
        self
    }

    /// Conditionally add a zero-argument modifier call.
    pub fn call_if(self, condition: bool, name: impl Into<String>) -> Self {
        if condition { self.call_empty(name) } else { self }
    }

    /// Add a one-argument modifier call if the argument is present.
    pub fn call_opt(self, name: impl Into<String>, arg: Option<impl Into<String>>) -> Self {
        match arg {
            Some(a) => self.call(name, a),
            None => self,
        }
    }

    /// Build the chain as a single-line string.
    pub fn build(&self) -> String {
        let mut result = format!("{}({})", self.base, self.base_args.join(", "));

        for call in &self.calls {
            match &call.arg {
                Some(arg) => result.push_str(&format!(".{}({})", call.name, arg)),
                None => result.push_str(&format!(".{}()", call.name)),
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_only() {
        let chain = ModifierChain::new("Text").arg("\"hi\"").build();
        assert_eq!(chain, "Text(\"hi\")");
    }

    #[test]
    fn test_simple_chain() {
        let chain = ModifierChain::new("Text")
            .arg("\"hi\"")
            .call("font", ".title")
            .call_empty("bold")
            .build();
        assert_eq!(chain, "Text(\"hi\").font(.title).bold()");
    }

    #[test]
    fn test_call_if() {
        let on = ModifierChain::new("Text")
            .arg("\"x\"")
            .call_if(true, "italic")
            .build();
        let off = ModifierChain::new("Text")
            .arg("\"x\"")
            .call_if(false, "italic")
            .build();
        assert_eq!(on, "Text(\"x\").italic()");
        assert_eq!(off, "Text(\"x\")");
    }

    #[test]
    fn test_call_opt() {
        let some = ModifierChain::new("Text")
            .arg("\"x\"")
            .call_opt("foregroundColor", Some(".red"))
            .build();
        let none = ModifierChain::new("Text")
            .arg("\"x\"")
            .call_opt("foregroundColor", None::<&str>)
            .build();
        assert_eq!(some, "Text(\"x\").foregroundColor(.red)");
        assert_eq!(none, "Text(\"x\")");
    }

    #[test]
    fn test_multiple_base_args() {
        let chain = ModifierChain::new("Stack")
            .arg("alignment: .leading")
            .arg("spacing: 8")
            .build();
        assert_eq!(chain, "Stack(alignment: .leading, spacing: 8)");
    }
}
