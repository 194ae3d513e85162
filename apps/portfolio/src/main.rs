#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use std::path::PathBuf;

    use anyhow::{Context, Result};
    use clap::Parser;
    use folio_core::Scheduler;
    use portfolio::{SiteConfig, Theme, build_page, export_html, simulate};

    #[derive(Parser, Debug)]
    #[command(name = "portfolio")]
    #[command(about = "Export the portfolio page as static HTML", long_about = None)]
    struct Args {
        /// JSON site config; defaults are used for anything it leaves out
        #[arg(short, long, value_name = "JSON")]
        config: Option<PathBuf>,

        /// Write the page here instead of stdout
        #[arg(short, long, value_name = "HTML")]
        out: Option<PathBuf>,

        /// Hydration script URL; the page ships hidden wrappers when set
        #[arg(long, value_name = "URL")]
        script: Option<String>,

        /// Scroll through the page in a simulated viewport and log reveals
        #[arg(long)]
        simulate: bool,
    }

    pub fn run() -> Result<()> {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
        let args = Args::parse();

        let mut cfg = match &args.config {
            Some(path) => SiteConfig::load(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => SiteConfig::default(),
        };
        if args.script.is_some() {
            cfg.script = args.script.clone();
        }
        let theme = Theme::default();

        if args.simulate {
            let mut sched = Scheduler::new().with_viewport(cfg.viewport.width, cfg.viewport.height);
            let page = build_page(&mut sched, &cfg, &theme);
            let report = simulate(&page, &cfg)?;
            let peak = report.steps.iter().map(|s| s.visible).max().unwrap_or(0);
            log::info!(
                "{} steps, {} transitions, at most {peak} of {} blocks visible",
                report.steps.len(),
                report.transitions,
                page.reveals.len()
            );
        }

        let mut sched = Scheduler::new().with_viewport(cfg.viewport.width, cfg.viewport.height);
        let mut page = build_page(&mut sched, &cfg, &theme);
        let html = export_html(&mut page, &cfg, &theme).context("rendering page")?;

        match &args.out {
            Some(path) => {
                std::fs::write(path, &html)
                    .with_context(|| format!("writing {}", path.display()))?;
                log::info!("wrote {} ({} bytes)", path.display(), html.len());
            }
            None => print!("{html}"),
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    cli::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {}
