//! Form field value objects

/// Type-safe field values
#[derive(Debug, Clone)]
pub enum FieldValue {
    Text(String),
    Select {
        options: &'static [&'static str],
        selected: Option<usize>,
    },
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: FieldValue,
    pub required: bool,
    pub placeholder: Option<String>,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &str, label: &str, required: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Text(String::new()),
            required,
            placeholder: None,
        }
    }

    /// Create a new text field with a placeholder shown while empty
    pub fn text_with_placeholder(name: &str, label: &str, placeholder: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Text(String::new()),
            required: false,
            placeholder: Some(placeholder.to_string()),
        }
    }

    /// Create a new single-select field, initially unset
    pub fn select(name: &str, label: &str, options: &'static [&'static str]) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Select {
                options,
                selected: None,
            },
            required: false,
            placeholder: None,
        }
    }

    /// Get the text value (returns empty string for select fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Select { .. } => "",
        }
    }

    /// Get the selected option label, if any
    pub fn selected_option(&self) -> Option<&'static str> {
        match &self.value {
            FieldValue::Select { options, selected } => selected.map(|i| options[i]),
            FieldValue::Text(_) => None,
        }
    }

    /// Get the selected option index, if any
    pub fn selected_index(&self) -> Option<usize> {
        match &self.value {
            FieldValue::Select { selected, .. } => *selected,
            FieldValue::Text(_) => None,
        }
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        match &mut self.value {
            FieldValue::Text(s) => s.push(c),
            FieldValue::Select { .. } => {
                // Select fields are driven by option cycling, not typing
            }
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => {
                s.pop();
            }
            FieldValue::Select { selected, .. } => {
                *selected = None;
            }
        }
    }

    /// Cycle the select field forward: unset -> first -> ... -> last -> unset
    pub fn next_option(&mut self) {
        if let FieldValue::Select { options, selected } = &mut self.value {
            *selected = match *selected {
                None => Some(0),
                Some(i) if i + 1 < options.len() => Some(i + 1),
                Some(_) => None,
            };
        }
    }

    /// Cycle the select field backward: unset -> last -> ... -> first -> unset
    pub fn prev_option(&mut self) {
        if let FieldValue::Select { options, selected } = &mut self.value {
            *selected = match *selected {
                None => Some(options.len() - 1),
                Some(0) => None,
                Some(i) => Some(i - 1),
            };
        }
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Select { selected, .. } => *selected = None,
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Select { options, selected } => match selected {
                Some(i) => options[*i].to_string(),
                None => "Select an option".to_string(),
            },
        }
    }
}
