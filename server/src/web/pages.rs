//! Server-rendered HTML. Every piece of paste text goes through `html_escape`.

const STYLE: &str = "body{font-family:system-ui,sans-serif;max-width:48rem;margin:2rem auto;padding:0 1rem}\
textarea{width:100%;min-height:16rem;font-family:monospace}\
pre{white-space:pre-wrap;word-break:break-word;background:#f5f5f5;padding:1rem;border-radius:4px}\
label{display:block;margin:.5rem 0}.error{color:#b00020}";

pub fn home_page() -> String {
    format!(
        r#"<!doctype html>
<html><head><meta charset="utf-8"><title>Pastebin</title><style>{STYLE}</style></head>
<body><h1>New paste</h1>
<form id="paste-form">
<textarea name="content" placeholder="Paste text here" required></textarea>
<label>Expire after (seconds) <input type="number" name="ttl_seconds" min="1"></label>
<label>Maximum views <input type="number" name="max_views" min="1"></label>
<button type="submit">Create</button>
</form>
<p id="result"></p>
<script>
document.getElementById("paste-form").addEventListener("submit", async (event) => {{
  event.preventDefault();
  const form = new FormData(event.target);
  const body = {{ content: form.get("content") }};
  for (const field of ["ttl_seconds", "max_views"]) {{
    const value = form.get(field);
    if (value) body[field] = Number(value);
  }}
  const result = document.getElementById("result");
  const response = await fetch("/api/pastes", {{
    method: "POST",
    headers: {{ "content-type": "application/json" }},
    body: JSON.stringify(body),
  }});
  const data = await response.json();
  result.replaceChildren();
  if (response.ok) {{
    const link = document.createElement("a");
    link.href = data.url;
    link.textContent = data.url;
    result.className = "";
    result.append(link);
  }} else {{
    result.className = "error";
    result.textContent = Object.entries(data)
      .map(([field, messages]) => field + ": " + [].concat(messages).join(" "))
      .join("; ");
  }}
}});
</script>
</body></html>"#
    )
}

pub fn paste_page(id: &str, content: &str) -> String {
    let id = html_escape::encode_text(id);
    let content = html_escape::encode_text(content);
    format!(
        r#"<!doctype html>
<html><head><meta charset="utf-8"><title>Paste {id}</title><style>{STYLE}</style></head>
<body><h1>Paste {id}</h1>
<pre>{content}</pre>
<p><a href="/">New paste</a></p></body></html>"#
    )
}

pub fn not_found_page() -> String {
    format!(
        r#"<!doctype html>
<html><head><meta charset="utf-8"><title>Not found</title><style>{STYLE}</style></head>
<body><h1>Paste not found</h1><p>This paste does not exist or has expired.</p>
<p><a href="/">New paste</a></p></body></html>"#
    )
}

pub fn error_page(err: &str) -> String {
    let safe = html_escape::encode_text(err);
    format!(
        r#"<!doctype html>
<html><head><meta charset="utf-8"><title>Error</title><style>{STYLE}</style></head>
<body><h1>Oops!</h1><p>Something went wrong.</p><pre>{safe}</pre></body></html>"#
    )
}
