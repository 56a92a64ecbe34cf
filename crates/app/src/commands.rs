//! Command handlers and their text output.

use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use hellorest_application::{
    CancellationToken, CollectionStore, CreateCollection, CreateCollectionInput, HttpClient,
    OpenRequest, SaveRequest, SaveRequestInput, SendSavedRequest,
};
use hellorest_domain::{
    AppSettings, CollectionTree, HttpMethod, HttpResponse, SavedRequest, TreeEntryKind,
};
use hellorest_infrastructure::SettingsRepository;
use tracing::{debug, info, warn};

use crate::cli::{Command, ConfigAction, SaveArgs};

/// Services shared by every command.
pub struct Services<S, C> {
    /// The collection store.
    pub store: Arc<S>,
    /// The HTTP client used by `send`.
    pub client: Arc<C>,
    /// Where `config` reads and writes settings.
    pub settings: SettingsRepository,
}

/// Runs one command and returns what should be printed on stdout.
pub async fn run<S, C>(ctx: &Services<S, C>, command: Command) -> anyhow::Result<String>
where
    S: CollectionStore,
    C: HttpClient,
{
    match command {
        Command::Tree => {
            let tree = ctx.store.enumerate_tree()?;
            debug!(requests = tree.request_count(), "Collection tree read");
            Ok(render_tree(&tree))
        }
        Command::NewFolder { name, parent } => {
            let output = CreateCollection::new(Arc::clone(&ctx.store))
                .execute(CreateCollectionInput { name, parent })?;
            info!(path = %output.path.display(), "Folder created");
            if output.tree.is_none() {
                warn!("Folder created but the collection tree could not be re-read");
            }
            Ok(format!("{}\n", output.path.display()))
        }
        Command::Save(args) => {
            let input = save_input(args)?;
            let output = SaveRequest::new(Arc::clone(&ctx.store)).execute(input)?;
            info!(name = %output.name, path = %output.path.display(), "Request saved");
            if output.tree.is_none() {
                warn!("Request saved but the collection tree could not be re-read");
            }
            Ok(format!("{}\n", output.path.display()))
        }
        Command::Show { path } => {
            let path = locate_request(ctx.store.as_ref(), &path)?;
            let output = OpenRequest::new(Arc::clone(&ctx.store)).execute(&path)?;
            Ok(render_request(&output.name, &output.request))
        }
        Command::Send { path } => {
            let path = locate_request(ctx.store.as_ref(), &path)?;
            let (token, cancel) = CancellationToken::new();
            let use_case = SendSavedRequest::new(Arc::clone(&ctx.store), Arc::clone(&ctx.client));

            let output = tokio::select! {
                result = use_case.execute(&path, cancel) => result?,
                _ = tokio::signal::ctrl_c() => {
                    token.cancel();
                    anyhow::bail!("request cancelled");
                }
            };
            let status = output.response.status;
            if status.is_success() {
                info!(%status, "Response received");
            } else {
                warn!(%status, "Request did not succeed");
            }
            Ok(render_response(&output.response))
        }
        Command::Config { action } => {
            let mut settings = ctx.settings.load().await.context("loading settings")?;
            let changed = match action {
                None | Some(ConfigAction::Show) => false,
                Some(ConfigAction::SetRoot { dir }) => {
                    let dir = std::path::absolute(&dir)
                        .with_context(|| format!("resolving {}", dir.display()))?;
                    settings.collections_root = Some(dir);
                    true
                }
                Some(ConfigAction::SetTimeout { ms }) => {
                    settings.request_timeout_ms = ms;
                    true
                }
            };
            if changed {
                ctx.settings
                    .save(&settings)
                    .await
                    .context("saving settings")?;
                info!("Settings saved");
            }
            Ok(render_settings(&settings, ctx.settings.path()))
        }
    }
}

/// Builds the save input, reading `--body-file` when given.
fn save_input(args: SaveArgs) -> anyhow::Result<SaveRequestInput> {
    let body = match (args.body, args.body_file) {
        (Some(body), _) => Some(body),
        (None, Some(file)) => Some(
            std::fs::read_to_string(&file)
                .with_context(|| format!("reading body from {}", file.display()))?,
        ),
        (None, None) => None,
    };

    let mut request = SavedRequest::new(args.method.as_str(), args.url);
    if !args.headers.is_empty() {
        request = request.with_headers(args.headers.join("\n"));
    }
    if let Some(body) = body {
        request = request.with_body(body);
    }

    Ok(SaveRequestInput {
        name: args.name,
        request,
        parent: args.parent,
    })
}

/// Relative request paths are taken from the collections root.
fn resolve_path(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

/// Existing paths win. A bare name with no such file is looked up in the
/// tree, first match in display order.
fn locate_request<S: CollectionStore>(store: &S, target: &Path) -> anyhow::Result<PathBuf> {
    let path = resolve_path(store.root(), target);
    if path.exists() {
        return Ok(path);
    }

    let mut components = target.components();
    let (Some(Component::Normal(name)), None) = (components.next(), components.next()) else {
        return Ok(path);
    };
    let Some(name) = name.to_str() else {
        return Ok(path);
    };
    let tree = store.enumerate_tree()?;
    Ok(tree.find_request(name).map_or(path, |node| {
        debug!(name, path = %node.path().display(), "Request found by name");
        node.path().to_path_buf()
    }))
}

/// One line per entry, two spaces per level, folders with a trailing `/`.
pub fn render_tree(tree: &CollectionTree) -> String {
    tree.flatten()
        .iter()
        .map(|entry| {
            let suffix = match entry.kind {
                TreeEntryKind::Folder => "/",
                TreeEntryKind::Request => "",
            };
            format!("{}{}{suffix}\n", "  ".repeat(entry.depth), entry.name)
        })
        .collect()
}

/// Editor-style view of a saved request.
pub fn render_request(name: &str, request: &SavedRequest) -> String {
    let mut out = format!(
        "# {name}\n{} {}\n",
        request.method.as_deref().unwrap_or(HttpMethod::Get.as_str()),
        request.url.as_deref().unwrap_or_default()
    );
    if let Some(headers) = request.headers.as_deref().filter(|h| !h.is_empty()) {
        out.push_str(headers);
        out.push('\n');
    }
    if let Some(body) = request.body.as_deref().filter(|b| !b.is_empty()) {
        out.push('\n');
        out.push_str(body);
        out.push('\n');
    }
    out
}

/// Summary line, response headers, blank line, then the body.
pub fn render_response(response: &HttpResponse) -> String {
    let mut out = response.summary();
    out.push('\n');
    let headers = response.headers_text();
    if !headers.is_empty() {
        out.push_str(&headers);
        out.push('\n');
    }
    out.push('\n');
    out.push_str(&response.pretty_body());
    out.push('\n');
    out
}

/// Stored settings, one `key: value` per line.
fn render_settings(settings: &AppSettings, file: Option<&Path>) -> String {
    let file = file.map_or_else(|| "(none)".to_string(), |p| p.display().to_string());
    let root = settings
        .collections_root
        .as_deref()
        .map_or_else(|| "(default)".to_string(), |p| p.display().to_string());
    format!(
        "settings_file: {file}\ncollections_root: {root}\nrequest_timeout_ms: {}\n",
        settings.request_timeout_ms
    )
}
