use std::fmt::{self, Write as _};

const STYLESHEET: &str = "\
*{box-sizing:border-box}body{margin:0;font-family:system-ui,sans-serif;color:#111827}\
nav{position:fixed;top:0;left:0;right:0;z-index:40;display:flex;justify-content:space-between;align-items:center;padding:0 1.5rem;height:5rem;background:rgba(255,255,255,.9)}\
nav img{height:3rem}nav a{margin-left:1rem;color:#111827;text-decoration:none}\
.button{display:inline-block;padding:.6rem 1.5rem;border-radius:9999px;background:#2563eb;color:#fff;font-weight:600;text-decoration:none;border:0;cursor:pointer}\
.hero{position:relative;height:100vh;display:flex;align-items:center;justify-content:center;text-align:center;color:#fff}\
.hero img{position:absolute;inset:0;width:100%;height:100%;object-fit:cover;z-index:-1}\
section{padding:4rem 1.5rem}h2{text-align:center}\
.carousel{display:grid;gap:1rem;overflow-x:auto}.carousel.single{max-width:56rem;margin:auto}\
.carousel.slides-2{grid-template-columns:repeat(2,minmax(0,1fr))}.carousel.slides-3{grid-template-columns:repeat(3,minmax(0,1fr))}\
.carousel img,.plan img,.location img{width:100%;border-radius:.75rem}figcaption{text-align:center;font-size:.875rem}\
.features{display:grid;grid-template-columns:repeat(auto-fit,minmax(16rem,1fr));gap:1.5rem}.feature{padding:1.5rem;border-radius:.75rem;background:#f9fafb}\
.cta{background:#000;color:#fff;text-align:center}footer{background:#111827;color:#fff;text-align:center;padding:2rem}\
.modal{display:none;position:fixed;inset:0;z-index:50;align-items:center;justify-content:center;background:rgba(0,0,0,.5)}\
.modal:target,.modal.open{display:flex}.modal-panel{position:relative;background:#fff;border-radius:.5rem;max-width:28rem;width:100%;padding:1.5rem}\
.modal-close{position:absolute;top:1rem;right:1rem;text-decoration:none;color:#6b7280}\
form .field{margin-bottom:1rem}input,textarea,select{width:100%;padding:.75rem;border:1px solid #d1d5db;border-radius:.5rem}\
.invalid{border-color:#ef4444}.field-error{color:#ef4444;font-size:.875rem}\
.banner-error{color:#dc2626;background:#fef2f2;padding:.75rem;border-radius:.5rem}\
.banner-success{color:#16a34a;background:#f0fdf4;padding:.75rem;border-radius:.5rem}\
.lightbox{position:fixed;inset:0;background:rgba(0,0,0,.9);display:flex;align-items:center;justify-content:center;color:#fff}\
.lightbox img{max-width:90vw;max-height:80vh}.lightbox .close{position:absolute;top:1rem;right:1.5rem;font-size:2rem;color:#fff;text-decoration:none}\
";

pub(crate) fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Meta refresh used to close a form once the confirmation has been shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Refresh<'a> {
    pub(crate) seconds: u64,
    pub(crate) target: &'a str,
}

pub(crate) fn write_document<F>(
    title: &str,
    refresh: Option<Refresh<'_>>,
    body: F,
) -> Result<String, fmt::Error>
where
    F: FnOnce(&mut String) -> fmt::Result,
{
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    if let Some(refresh) = refresh {
        writeln!(
            html,
            "<meta http-equiv=\"refresh\" content=\"{};url={}\">",
            refresh.seconds,
            escape_html(refresh.target)
        )?;
    }
    writeln!(html, "<title>{}</title>", escape_html(title))?;
    writeln!(html, "<style>{STYLESHEET}</style>\n</head>\n<body>")?;
    body(&mut html)?;
    html.push_str("</body>\n</html>\n");
    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_html(r#"<b>"Jai&Sons'"</b>"#),
            "&lt;b&gt;&quot;Jai&amp;Sons&#39;&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn document_includes_refresh_when_requested() {
        let html = write_document(
            "Thanks",
            Some(Refresh {
                seconds: 3,
                target: "/",
            }),
            |out| {
                out.push_str("<p>ok</p>");
                Ok(())
            },
        )
        .expect("renders");

        assert!(html.contains("<meta http-equiv=\"refresh\" content=\"3;url=/\">"));
        assert!(html.contains("<title>Thanks</title>"));
        assert!(html.contains("<p>ok</p>"));
    }
}
