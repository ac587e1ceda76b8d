/// SniffOptions - Options shared by module and tree sniffing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SniffOptions {
    /// Render a template as the license text when a name is known from the
    /// manifest but no license text exists on disk
    pub generate_body: bool,
}

impl SniffOptions {
    pub fn new(generate_body: bool) -> Self {
        Self { generate_body }
    }

    pub fn with_generate_body(mut self, generate_body: bool) -> Self {
        self.generate_body = generate_body;
        self
    }
}

impl Default for SniffOptions {
    fn default() -> Self {
        Self {
            generate_body: true,
        }
    }
}
