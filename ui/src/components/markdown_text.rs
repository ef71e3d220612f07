//! Renders user-supplied markdown (job requirements) safely.
//!
//! Raw HTML is escaped, not rendered, so a hostile posting cannot inject
//! script into other users' browsers.

use pulldown_cmark::{Event, Options, Parser, html};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// The markdown text to render.
    pub text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component]
pub fn MarkdownText(props: &Props) -> Html {
    let html_content = render_markdown(&props.text);

    let base_classes = classes!(
        "prose",
        "prose-neutral",
        "dark:prose-invert",
        "prose-sm",
        "max-w-none",
        props.class.clone()
    );

    html! {
        <div class={base_classes}>
            { Html::from_html_unchecked(html_content.into()) }
        </div>
    }
}

fn render_markdown(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_SMART_PUNCTUATION;

    // Raw HTML events are downgraded to text so they come out escaped.
    let parser =
        Parser::new_ext(markdown, options).map(|event| match event {
            Event::Html(html) => Event::Text(html),
            Event::InlineHtml(html) => Event::Text(html),
            event => event,
        });
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

#[cfg(test)]
mod tests {
    use super::render_markdown;

    #[test]
    fn renders_basic_markdown() {
        let out = render_markdown("## Requirements\n\n- Rust\n- **SQL**");
        assert!(out.contains("<h2>"));
        assert!(out.contains("<li>Rust</li>"));
        assert!(out.contains("<strong>SQL</strong>"));
    }

    #[test]
    fn escapes_raw_html() {
        let out = render_markdown("hello <script>alert(1)</script>");
        assert!(!out.contains("<script>"));
        assert!(out.contains("&lt;script&gt;"));
    }
}
