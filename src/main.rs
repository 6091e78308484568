//! Lazy Picture CLI
//!
//! Usage:
//!   lazy-picture [OPTIONS] --locations <FILE> --manifest <FILE> --templates <DIR> <IMAGE_ID>
//!
//! Renders the placeholder markup for one image to stdout, using the
//! file-backed collaborators: a V2 locations JSON file, a media manifest
//! JSON file, and a directory of `<name>.tpl` templates.

use std::path::PathBuf;
use std::process;

use clap::Parser;

use lazy_picture::location::JsonLocationRegistry;
use lazy_picture::media::{ImageId, MediaManifest, StaticSecurityContext};
use lazy_picture::renderer::{PictureRenderer, RenderArgs};
use lazy_picture::settings::Settings;
use lazy_picture::template::DirTemplateStore;

#[derive(Parser)]
#[command(name = "lazy-picture")]
#[command(about = "Render responsive lazy-loading picture markup")]
struct Cli {
    /// Image id to render
    image_id: u64,

    /// Location name (responsive breakpoint set); passthrough when omitted
    #[arg(short, long)]
    location: Option<String>,

    /// Main template name overriding the configured default
    #[arg(short, long)]
    template: Option<String>,

    /// Class applied to the root element (repeatable)
    #[arg(short, long = "class")]
    classes: Vec<String>,

    /// Locations JSON file
    #[arg(long)]
    locations: PathBuf,

    /// Media manifest JSON file
    #[arg(long)]
    manifest: PathBuf,

    /// Directory containing <name>.tpl template files
    #[arg(long)]
    templates: PathBuf,

    /// Settings TOML file
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Treat the request as secure and rewrite plain-scheme source URLs
    #[arg(long)]
    https: bool,

    /// Markup to fall back to (and annotate on errors)
    #[arg(long, default_value = "<img />")]
    html: String,
}

fn main() {
    let cli = Cli::parse();

    let settings = match &cli.settings {
        Some(path) => match Settings::from_file(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error loading settings '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => Settings::default(),
    };

    let locations = match JsonLocationRegistry::from_file(&cli.locations) {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("Error loading locations '{}': {}", cli.locations.display(), e);
            process::exit(1);
        }
    };

    let manifest = match MediaManifest::from_file(&cli.manifest) {
        Ok(manifest) => manifest,
        Err(e) => {
            eprintln!("Error loading manifest '{}': {}", cli.manifest.display(), e);
            process::exit(1);
        }
    };

    let renderer = PictureRenderer::new(
        Box::new(locations),
        Box::new(DirTemplateStore::new(&cli.templates)),
        Box::new(manifest.clone()),
        Box::new(manifest),
        Box::new(StaticSecurityContext::new(cli.https)),
    )
    .with_config(settings.renderer_config());

    let args = RenderArgs {
        location: cli.location,
        template_override: cli.template,
        css_classes: cli.classes,
    };

    println!("{}", renderer.render(ImageId(cli.image_id), &args, &cli.html));
}
