use anyhow::Context as _;
use mood::{BoxError, Command, Context, Key, Mood, Strategy};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const TARGETS: Key<Vec<&'static str>> = Key::new("targets");

struct Bundle {
    entry: String,
    minify: bool,
}

impl Command for Bundle {
    fn execute(&mut self, _cx: &mut Context) -> Result<(), BoxError> {
        let mode = if self.minify { "minified" } else { "plain" };
        println!("hit the bundle route! ({} -> {mode})", self.entry);
        Ok(())
    }
}

fn build(cx: &mut Context) -> Result<(), BoxError> {
    let targets = cx.store().get(TARGETS)?;
    let fallback = targets.first().ok_or("no build targets configured")?;
    let target = cx.arg_at_or(2, fallback);
    if !targets.iter().any(|t| *t == target) {
        return Err(format!("unknown target '{target}'").into());
    }

    if cx.has_flag("--release") || cx.has_flag("-r") {
        println!("hit the build route! ({target}, release)");
    } else {
        println!("hit the build route! ({target})");
    }
    Ok(())
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

pub fn main() -> anyhow::Result<()> {
    setup_logging();

    let strategy = match std::env::var("MOOD_STRATEGY") {
        Ok(s) => s.parse::<Strategy>()?,
        Err(_) => Strategy::default(),
    };

    let mut app = Mood::from_env().with_strategy(strategy);

    app.context_mut()
        .store_mut()
        .set(TARGETS, vec!["native", "web"])?;

    app.register("build", build);

    app.register_command("bundle", 1, |cx| {
        Ok(Bundle {
            entry: cx.arg_at_or(2, "src/main.js").to_string(),
            minify: cx.has_flag("--minify"),
        })
    });

    app.set_default(|cx| {
        if cx.positionals().is_empty() {
            println!(
                "welcome to {}, please pass an arg to your cli application",
                cx.program()
            );
            return Ok(());
        }
        cx.enforce_arg(1, &["build", "bundle"])?;
        Ok(())
    });

    app.run().context("dispatch failed")
}
