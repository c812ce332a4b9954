use anyhow::{Context, bail};
use inkwell_client::pages::{
    DeleteFlow, HomeView, LoginForm, Outcome, PostForm, RegisterForm, authenticate,
    delete_confirmed, open_for_edit, posts_by_author, register, submit_create, submit_update,
};
use inkwell_client::routes::{Access, guard};
use inkwell_client::{AppRoute, BlogApi, Cover, CoverFile, NoticeKind, Post, SessionStorage, SessionStore};
use std::io::{BufRead, Write};
use std::path::Path;

/// Field overrides given on the command line for create/edit.
#[derive(Debug, Default, Clone)]
pub struct PostFields {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub content: Option<String>,
}

/// Refuses commands whose page would be guarded in the browser.
pub fn require_session<S: SessionStorage>(route: &AppRoute, store: &SessionStore<S>) -> anyhow::Result<()> {
    match guard(route, store.user_info()) {
        Access::Render => Ok(()),
        Access::Redirect(_) => bail!("You must log in first: inkwell login --username <name> --password <password>"),
    }
}

/// Prints a successful outcome; turns an error outcome into a failure.
pub fn report(outcome: Outcome) -> anyhow::Result<()> {
    match outcome.notice.kind {
        NoticeKind::Error => bail!("{}", outcome.notice.text),
        _ => {
            println!("{}: {}", outcome.notice.title, outcome.notice.text);
            Ok(())
        }
    }
}

pub async fn login<A: BlogApi + ?Sized, S: SessionStorage>(
    api: &A,
    store: &mut SessionStore<S>,
    form: LoginForm,
) -> anyhow::Result<()> {
    let session = authenticate(&form, api).await.map_err(|e| anyhow::anyhow!(e.user_message()))?;
    let outcome = LoginForm::welcome(&session);
    store.log_in(session).context("could not save the session")?;
    report(outcome)
}

pub async fn register_account<A: BlogApi + ?Sized>(api: &A, form: RegisterForm) -> anyhow::Result<()> {
    let outcome = register(&form, api).await.map_err(|e| anyhow::anyhow!(e.user_message()))?;
    report(outcome)
}

pub async fn list<A: BlogApi + ?Sized>(api: &A, author: Option<&str>) -> anyhow::Result<()> {
    let posts = api.list_posts().await.map_err(|e| anyhow::anyhow!(e.user_message()))?;
    let posts = match author {
        Some(id) => posts_by_author(&posts, id),
        None => posts,
    };
    let view = HomeView::new(posts);

    println!("Posts: {}  Authors: {}", view.count(), view.distinct_authors());
    for post in view.posts() {
        println!("{}", summary_line(post));
    }
    Ok(())
}

pub async fn show<A: BlogApi + ?Sized>(api: &A, id: &str) -> anyhow::Result<()> {
    let post = api.get_post(id).await.map_err(|e| anyhow::anyhow!(e.user_message()))?;
    println!("{}", post.title);
    println!("{}", summary_line(&post));
    if !post.summary.is_empty() {
        println!("\n> {}", post.summary);
    }
    println!("\n{}", post.content);
    Ok(())
}

pub async fn create<A: BlogApi + ?Sized>(
    api: &A,
    fields: PostFields,
    cover: Option<&Path>,
) -> anyhow::Result<()> {
    let mut form = PostForm::new();
    apply(&mut form, fields);
    if let Some(path) = cover {
        form.draft.cover = Cover::Upload(read_cover(path)?);
    }
    report(submit_create(&mut form, api).await)
}

pub async fn edit<A: BlogApi + ?Sized, S: SessionStorage>(
    api: &A,
    store: &SessionStore<S>,
    id: &str,
    fields: PostFields,
    cover_url: Option<String>,
) -> anyhow::Result<()> {
    let post = api.get_post(id).await.map_err(|e| anyhow::anyhow!(e.user_message()))?;
    let mut form = match open_for_edit(&post, store.user_info()) {
        Ok(form) => form,
        Err(outcome) => return report(outcome),
    };
    apply(&mut form, fields);
    if let Some(url) = cover_url {
        form.draft.cover = Cover::Url(url);
    }
    report(submit_update(&mut form, id, api).await)
}

pub async fn delete<A: BlogApi + ?Sized>(
    api: &A,
    id: &str,
    assume_yes: bool,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> anyhow::Result<()> {
    let mut flow = DeleteFlow::default();
    flow.request();

    let prompt = DeleteFlow::prompt();
    let question = format!("{} {}", prompt.title, prompt.text);
    if !assume_yes && !ask(&question, input, output)? {
        flow.decline();
        writeln!(output, "Nothing deleted.")?;
        return Ok(());
    }

    match delete_confirmed(&mut flow, id, api).await {
        Some(outcome) => report(outcome),
        None => Ok(()),
    }
}

fn apply(form: &mut PostForm, fields: PostFields) {
    if let Some(title) = fields.title {
        form.draft.title = title;
    }
    if let Some(summary) = fields.summary {
        form.draft.summary = summary;
    }
    if let Some(content) = fields.content {
        form.draft.content = content;
    }
}

fn read_cover(path: &Path) -> anyhow::Result<CoverFile> {
    let bytes = std::fs::read(path).with_context(|| format!("could not read {}", path.display()))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "cover".to_string());
    Ok(CoverFile::new(name, bytes))
}

fn summary_line(post: &Post) -> String {
    format!(
        "- [{}] {} (by @{}, {})",
        post.id,
        post.title,
        post.author_name().unwrap_or("unknown"),
        post.created_label().unwrap_or_else(|| "undated".into()),
    )
}

fn ask(question: &str, input: &mut impl BufRead, output: &mut impl Write) -> anyhow::Result<bool> {
    write!(output, "{question} [y/N] ")?;
    output.flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}
