use crate::types::ThemeMode;

pub struct ThemeDefinition {
    pub css: &'static str,
}

pub fn theme_definition(mode: ThemeMode) -> ThemeDefinition {
    match mode {
        ThemeMode::Dark => ThemeDefinition { css: DARK_THEME },
        ThemeMode::Light => ThemeDefinition { css: LIGHT_THEME },
    }
}

/// Layout and component styles shared by every theme.
pub const BASE_CSS: &str = r#"
* { box-sizing: border-box; }
body { margin: 0; font-family: -apple-system, "Segoe UI", Roboto, sans-serif; }
.header { position: sticky; top: 0; z-index: 10; padding: 0.75rem 1rem; border-bottom: 1px solid var(--color-border); }
.header-title { margin: 0 0 0.5rem; font-size: 1.25rem; text-align: center; }
.tabs { display: flex; gap: 0.25rem; justify-content: space-around; }
.tab { flex: 1; padding: 0.4rem 0.2rem; margin: 0; font-size: 0.8rem; font-weight: 500; text-align: center; border-radius: 0.5rem; cursor: pointer; color: var(--color-text-muted); }
.tab.active { color: var(--color-text-primary); background: var(--color-surface-muted); }
.main-container { max-width: 600px; margin: 0 auto; padding: 1rem; padding-bottom: 3rem; }
.card { border: 1px solid var(--color-border); border-radius: 0.75rem; padding: 1rem; margin-bottom: 1rem; background: var(--color-bg-secondary); }
.card h3 { margin-top: 0; }
.section-title { margin: 0 0 0.5rem; font-size: 1rem; }
.btn { padding: 0.5rem 1rem; border: 1px solid var(--color-border); border-radius: 0.5rem; background: transparent; color: var(--color-text-primary); cursor: pointer; }
.btn:disabled { opacity: 0.5; cursor: default; }
.btn-primary { background: var(--color-accent); color: var(--color-accent-text); border-color: var(--color-accent); }
.btn-ghost { border: none; background: transparent; }
.btn-block { width: 100%; }
.badge { display: inline-block; padding: 0.1rem 0.5rem; border-radius: 999px; font-size: 0.75rem; border: 1px solid var(--color-border); margin-right: 0.25rem; }
.badge-accent { background: var(--color-accent); color: var(--color-accent-text); border-color: var(--color-accent); }
.alert { border: 1px solid var(--color-danger); color: var(--color-danger); border-radius: 0.5rem; padding: 0.75rem; margin-bottom: 1rem; display: flex; justify-content: space-between; gap: 0.5rem; }
.alert-dismiss { color: inherit; cursor: pointer; font-size: 1rem; padding: 0 0.25rem; }
.text-muted { color: var(--color-text-muted); font-size: 0.85rem; }
.stat-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 0.75rem; margin-bottom: 1rem; }
.stat-card { text-align: center; padding: 0.75rem; border: 1px solid var(--color-border); border-radius: 0.75rem; }
.stat-value { font-size: 1.2rem; font-weight: 700; margin: 0.15rem 0; }
.progress-track { height: 0.4rem; border-radius: 999px; background: var(--color-surface-muted); overflow: hidden; }
.progress-fill { height: 100%; background: var(--color-accent); }
.week-strip { display: flex; gap: 0.4rem; overflow-x: auto; padding-bottom: 0.5rem; margin-bottom: 1rem; }
.day-button { min-width: 64px; display: flex; flex-direction: column; align-items: center; padding: 0.5rem 0.25rem; border: 1px solid var(--color-border); border-radius: 0.6rem; background: transparent; color: var(--color-text-primary); cursor: pointer; }
.day-button.selected { background: var(--color-accent); color: var(--color-accent-text); border-color: var(--color-accent); }
.day-button.planned { border-color: var(--color-accent); }
.meal-card { position: relative; border: 1px solid var(--color-border); border-radius: 0.6rem; padding: 0.75rem 3rem 0.75rem 0.75rem; margin-bottom: 0.6rem; }
.meal-card h4 { margin: 0 0 0.25rem; }
.swap-button { position: absolute; top: 0.5rem; right: 0.5rem; }
.dialog-overlay { position: fixed; inset: 0; background: var(--color-bg-overlay); display: flex; align-items: center; justify-content: center; z-index: 50; }
.dialog { width: min(420px, 92vw); background: var(--color-bg-primary); border: 1px solid var(--color-border); border-radius: 0.75rem; padding: 1.25rem; }
.dialog-footer { display: flex; justify-content: flex-end; gap: 0.5rem; margin-top: 1rem; }
.form-row { margin-bottom: 0.75rem; }
.form-row label { display: block; margin-bottom: 0.25rem; font-size: 0.85rem; }
.form-row input, .form-row select { width: 100%; padding: 0.45rem; border: 1px solid var(--color-input-border); border-radius: 0.45rem; background: var(--color-input-bg); color: var(--color-text-primary); }
.checkbox-row { display: flex; align-items: center; gap: 0.4rem; margin-bottom: 0.3rem; font-size: 0.9rem; }
.search-row { display: flex; gap: 0.5rem; margin-bottom: 1rem; }
.search-row input { flex: 1; padding: 0.5rem; border: 1px solid var(--color-input-border); border-radius: 0.5rem; background: var(--color-input-bg); color: var(--color-text-primary); }
.list-row { display: flex; justify-content: space-between; align-items: center; border: 1px solid var(--color-border); border-radius: 0.5rem; padding: 0.5rem 0.75rem; margin-bottom: 0.5rem; }
.scan-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 0.6rem; }
.scan-tile { border: 1px solid var(--color-border); border-radius: 0.6rem; padding: 0.6rem; cursor: pointer; }
.detail-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 0.5rem 1.5rem; margin-bottom: 1rem; }
.detail-row { display: flex; justify-content: space-between; font-size: 0.9rem; }
.toggle-row { display: flex; justify-content: space-between; align-items: center; margin-bottom: 0.5rem; }
.tab-panels { position: relative; }
.tab-panel { display: none; }
.tab-panel.active { display: block; }
.header-content { max-width: 600px; margin: 0 auto; }
.wordmark { margin: 0 0 0.5rem; font-size: 1.25rem; text-align: center; color: var(--color-accent); }
.week-header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 0.75rem; }
.week-label { font-size: 0.9rem; color: var(--color-text-muted); }
.btn-icon { min-width: 2.25rem; padding: 0.35rem 0.6rem; font-size: 1rem; }
.day-name { font-size: 0.7rem; text-transform: uppercase; }
.day-number { font-size: 1.1rem; font-weight: 600; }
.planner-header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 0.75rem; }
.planner-header h2 { margin: 0; font-size: 1.05rem; }
.empty-state { text-align: center; }
.meal-info { display: flex; flex-direction: column; gap: 0.2rem; }
.meal-slot { font-size: 0.75rem; text-transform: uppercase; color: var(--color-text-muted); }
.meal-name { font-weight: 600; }
.progress-row { margin-bottom: 0.5rem; }
.progress-label { display: flex; justify-content: space-between; font-size: 0.85rem; margin-bottom: 0.25rem; }
.water-controls { display: flex; gap: 0.5rem; }
.badge-row { margin-bottom: 0.75rem; }
.product-header { display: flex; justify-content: space-between; gap: 0.75rem; margin-bottom: 0.5rem; }
.product-header h3 { margin: 0; }
.product-header p { margin: 0.2rem 0 0; color: var(--color-text-muted); font-size: 0.85rem; }
.product-image { width: 72px; height: 72px; object-fit: contain; border-radius: 0.5rem; }
.detail-cell { display: flex; flex-direction: column; }
.detail-label { font-size: 0.75rem; color: var(--color-text-muted); }
.detail-value { font-weight: 600; }
.ingredients { font-size: 0.85rem; color: var(--color-text-muted); }
.saved-note { color: var(--color-accent); font-size: 0.85rem; margin: 0.5rem 0 0; }
.btn-danger { border-color: var(--color-danger); color: var(--color-danger); }
.totals { margin-top: 0.75rem; }
"#;

const DARK_THEME: &str = r#"
:root {
    --color-bg-primary: #0b0b0c;
    --color-bg-secondary: #121214;
    --color-bg-overlay: rgba(0, 0, 0, 0.7);
    --color-text-primary: #f5f5f5;
    --color-text-muted: #9b9b9b;
    --color-border: #2a2a2e;
    --color-surface-muted: #1d1d21;
    --color-input-border: #3a3a40;
    --color-input-bg: #0b0b0c;
    --color-accent: #34c76f;
    --color-accent-text: #06130a;
    --color-danger: #ff6b6b;
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
.header { background: var(--color-bg-primary); }
"#;

const LIGHT_THEME: &str = r#"
:root {
    --color-bg-primary: #ffffff;
    --color-bg-secondary: #fafafa;
    --color-bg-overlay: rgba(0, 0, 0, 0.35);
    --color-text-primary: #111111;
    --color-text-muted: #666666;
    --color-border: #d9d9de;
    --color-surface-muted: #ececf0;
    --color-input-border: #c2c2c8;
    --color-input-bg: #ffffff;
    --color-accent: #16a34a;
    --color-accent-text: #ffffff;
    --color-danger: #dc2626;
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
.header { background: var(--color-bg-primary); }
"#;
