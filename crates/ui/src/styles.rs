//! CSS shared by every page that renders cards.

/// Card and grid styles. Colours come from `--card-accent` and the
/// `theme-light` / `theme-dark` classes on the document root.
pub const CARD_CSS: &str = r#"
.theme-light { --bg: #fafafa; --fg: #09090b; --card-bg: #ffffff; --muted: #71717a; --border: #e4e4e7; }
.theme-dark  { --bg: #000000; --fg: #fafafa; --card-bg: #18181b; --muted: #a1a1aa; --border: #27272a; }
body { margin: 0; background: var(--bg); color: var(--fg); font-family: system-ui, -apple-system, sans-serif; }
.card-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(14rem, 1fr)); gap: 1.5rem; }
.card { display: flex; flex-direction: column; gap: 1rem; padding: 1.5rem; border: 1px solid var(--border); border-radius: 0.75rem; background: var(--card-bg); }
.card-header { display: grid; grid-template-columns: 1fr auto; gap: 0.375rem; }
.card-title { margin: 0; font-size: 1rem; font-weight: 600; }
.card-description { grid-column: 1; margin: 0; color: var(--muted); font-size: 0.875rem; }
.card-action { grid-column: 2; grid-row: 1 / span 2; align-self: start; color: var(--card-accent); font-size: 0.875rem; }
button.card-action[disabled] { color: var(--muted); cursor: not-allowed; background: none; border: 1px solid var(--border); border-radius: 0.375rem; }
.card-footer { color: var(--muted); font-size: 0.875rem; }
.card-placeholder { border-style: dashed; color: var(--muted); }
"#;
