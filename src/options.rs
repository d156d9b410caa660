//! Configuration options for plain-text extraction.

/// Configuration options for plain-text extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use warctext::ExtractOpts;
///
/// let opts = ExtractOpts {
///     main_content: true,
///     links: true,
///     ..ExtractOpts::default()
/// };
/// ```
#[derive(Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct ExtractOpts {
    /// Emit newlines for block elements, indent lists and keep `<pre>`
    /// whitespace. When disabled the output is a single line with all
    /// whitespace collapsed.
    ///
    /// Default: `true`
    pub preserve_formatting: bool,

    /// Prepend `\u{2022}` bullets or `N.` numbers to `<li>` items.
    ///
    /// Default: `true`
    pub list_bullets: bool,

    /// Append ` (href)` after the text of a closing `<a>`.
    ///
    /// Default: `false`
    pub links: bool,

    /// Emit the `alt` attribute of `<img>` and `<area>` elements.
    ///
    /// Default: `true`
    pub alt_texts: bool,

    /// Emit `[ value ]` for inputs and bracket `<textarea>`/`<button>`
    /// contents.
    ///
    /// Default: `false`
    pub form_fields: bool,

    /// Include the contents of `<noscript>` elements.
    ///
    /// Default: `false`
    pub noscript: bool,

    /// Apply the heuristic main-content classifier, suppressing
    /// navigation, ads, comments and other page chrome.
    ///
    /// Default: `false`
    pub main_content: bool,

    /// When `main_content` is enabled, treat comment sections as main
    /// content rather than chrome.
    ///
    /// Default: `true`
    pub comments: bool,

    /// Additional CSS selectors to prune before the walk.
    ///
    /// Default: empty
    pub skip_elements: Vec<String>,
}

impl Default for ExtractOpts {
    fn default() -> Self {
        Self {
            preserve_formatting: true,
            list_bullets: true,
            links: false,
            alt_texts: true,
            form_fields: false,
            noscript: false,
            main_content: false,
            comments: true,
            skip_elements: Vec::new(),
        }
    }
}
