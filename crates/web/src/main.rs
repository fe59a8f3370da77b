use std::io::Write;

use anyhow::Context;
use storefront_web::{render_landing_page, LandingPage, SiteConfig};

fn main() -> anyhow::Result<()> {
    storefront_observability::init();

    let config = SiteConfig::from_env().context("invalid site configuration")?;
    let html = render_landing_page(&LandingPage::demo(), &config);

    match &config.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            std::fs::write(path, &html)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = html.len(), "wrote landing page");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(html.as_bytes())
                .and_then(|()| stdout.flush())
                .context("failed to write landing page to stdout")?;
        }
    }

    Ok(())
}
