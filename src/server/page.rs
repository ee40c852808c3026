use crate::form::Block;
use std::fmt::Write;

const STYLE: &str = r#"
body { font-family: sans-serif; max-width: 46rem; margin: 2rem auto; padding: 0 1rem; color: #262730; }
textarea { width: 100%; box-sizing: border-box; font: inherit; padding: .5rem; }
button { margin-top: .75rem; padding: .4rem 1rem; }
.warning, .success, .error { padding: .75rem 1rem; border-radius: .4rem; margin-top: 1rem; }
.warning { background: #fffce7; color: #926c05; }
.success { background: #dff5e3; color: #177233; }
.error { background: #ffecec; color: #9d1c1c; }
pre { background: #f6f6f9; padding: .75rem 1rem; border-radius: .4rem; overflow-x: auto; }
"#;

/// Renders blocks as a complete HTML document. Form controls are grouped in a
/// single `<form>` so the text and the trigger travel in one request.
pub fn render_html(blocks: &[Block]) -> String {
    let title = blocks
        .iter()
        .find_map(|block| match block {
            Block::Title { text } => Some(text.as_str()),
            _ => None,
        })
        .unwrap_or_default();

    let mut body = String::new();
    let mut form = String::new();

    for block in blocks {
        match block {
            Block::TextArea {
                label,
                value,
                height,
            } => {
                // A newline right after <textarea> is dropped by browsers.
                let _ = write!(
                    form,
                    r#"<label for="text">{}</label><textarea id="text" name="text" style="height: {}px">
{}</textarea>"#,
                    escape(label),
                    height,
                    escape(value)
                );
            }
            Block::SubmitButton { label, busy_label } => {
                let _ = write!(
                    form,
                    r#"<button type="submit" data-busy="{}">{}</button>"#,
                    escape(busy_label),
                    escape(label)
                );
            }
            other => {
                flush_form(&mut body, &mut form);
                render_block(&mut body, other);
            }
        }
    }

    flush_form(&mut body, &mut form);

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>{}</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        escape(title),
        STYLE,
        body
    )
}

fn flush_form(out: &mut String, form: &mut String) {
    if form.is_empty() {
        return;
    }
    let _ = write!(
        out,
        r#"<form method="post" action="/" onsubmit="var b=this.querySelector('button');b.disabled=true;b.textContent=b.dataset.busy;">{}</form>"#,
        form
    );
    form.clear();
}

fn render_block(out: &mut String, block: &Block) {
    let _ = match block {
        Block::Title { text } => write!(out, "<h1>{}</h1>", escape(text)),
        Block::Markdown { text } => write!(out, "<p>{}</p>", escape(text)),
        Block::Warning { text } => write!(out, r#"<div class="warning">{}</div>"#, escape(text)),
        Block::Success { text } => write!(out, r#"<div class="success">{}</div>"#, escape(text)),
        Block::Error { text } => write!(out, r#"<div class="error">{}</div>"#, escape(text)),
        Block::Json { value } => {
            let pretty = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
            write!(out, r#"<pre class="json">{}</pre>"#, escape(&pretty))
        }
        Block::Raw { text } => write!(out, r#"<pre class="raw">{}</pre>"#, escape(text)),
        Block::TextArea { .. } | Block::SubmitButton { .. } => Ok(()),
    };
}

pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
