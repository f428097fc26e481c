use maud::{html, Markup, DOCTYPE};

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; color: #1f2937; }
header { display: flex; align-items: center; gap: 0.75rem; padding: 0.75rem 1.5rem; box-shadow: 0 1px 3px rgba(0,0,0,.1); }
header h3 { margin: 0; }
main.container { max-width: 1100px; margin: 2rem auto; padding: 0 1rem; }
textarea { width: 100%; min-height: 10rem; font-family: ui-monospace, monospace; padding: 0.5rem; }
button.primary, a.button { display: inline-block; margin-top: 0.75rem; padding: 8px 16px; background: #524ed2; color: white; border: none; border-radius: 4px; cursor: pointer; text-decoration: none; }
.notice { padding: 0.75rem 1rem; border-radius: 6px; margin: 1rem 0; }
.notice.success { background: #ecfdf5; color: #065f46; }
.notice.warning { background: #fffbeb; color: #92400e; }
table.listings { width: 100%; border-collapse: collapse; font-size: 0.9em; }
table.listings th { padding: 8px; text-align: left; border-bottom: 2px solid #e5e7eb; }
table.listings td { padding: 8px; border-bottom: 1px solid #f3f4f6; word-break: break-all; }
table.listings tr.error td { color: #b91c1c; }
.previews { display: flex; flex-wrap: wrap; gap: 1.5rem; }
.preview img { display: block; border-radius: 6px; }
"#;

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (maud::PreEscaped(STYLE)) }
            }
            body {
                header {
                    svg
                        xmlns="http://www.w3.org/2000/svg"
                        width="24"
                        height="24"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="#524ed2"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                    {
                        path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                        path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
                        path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
                        path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
                    }
                    h3 { a href="/" { "Zillow Scraper App" } }
                }
                (content)
            }
        }
    }
}
