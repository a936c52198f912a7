// Command handlers for ls, run, show, and edit

use anyhow::{bail, Context, Result};
use std::sync::Arc;

use crate::config::Config;
use crate::exec::{mark_executable, run_command, LineCallback, ScratchDir};
use crate::github::GithubClient;
use crate::library::{filter_kisses, Kiss};
use crate::search::build_matcher;

use super::prompt;

/// Conventional entry script every runnable kiss carries.
const ENTRY_SCRIPT: &str = "run";

/// Show all kisses, optionally filtered by the character sequence.
pub async fn ls(
    client: &GithubClient,
    config: &Config,
    user: Option<&str>,
    seq: &[String],
) -> Result<()> {
    let kisses = select_kisses(client, config, user, seq).await?;
    prompt::show_kisses(&mut std::io::stdout(), &kisses)
}

/// Run a kiss: clone its gist into a scratch directory, mark the entry
/// script executable, and execute it, streaming its output.
pub async fn run(
    client: &GithubClient,
    config: &Config,
    user: Option<&str>,
    seq: &[String],
) -> Result<()> {
    let kisses = select_kisses(client, config, user, seq).await?;
    let kiss = choose_one(&kisses, "run")?;

    let scratch = ScratchDir::new()?;
    run_command(
        "git",
        &["clone", &kiss.gist.git_pull_url, "."],
        scratch.path(),
        None,
    )
    .await
    .with_context(|| format!("Cloning \"{}\" failed", kiss.name))?;

    let script = scratch.path().join(ENTRY_SCRIPT);
    mark_executable(&script)?;

    let echo: LineCallback = Arc::new(|line| println!("{}", line));
    let script_path = format!("./{}", ENTRY_SCRIPT);
    run_command(&script_path, &[], scratch.path(), Some(echo))
        .await
        .with_context(|| format!("Running \"{}\" failed", kiss.name))?;

    Ok(())
}

/// Show kiss details: README text, file list, timestamps, and URL.
pub async fn show(
    client: &GithubClient,
    config: &Config,
    user: Option<&str>,
    seq: &[String],
) -> Result<()> {
    let kisses = select_kisses(client, config, user, seq).await?;
    let kiss = choose_one(&kisses, "view")?;

    println!("Showing details for \"{}\"\n", kiss.name);

    if let Some(readme) = kiss
        .gist
        .files
        .values()
        .find(|file| file.filename.starts_with("README"))
    {
        let text = client.fetch_raw(&readme.raw_url).await?;
        println!("{}\n", text.trim_end());
    }

    let filenames: Vec<&str> = kiss.gist.files.keys().map(String::as_str).collect();
    println!("Includes: {}", filenames.join(", "));
    println!("Created: {}", kiss.gist.created_at);
    println!("Updated: {}", kiss.gist.updated_at);
    println!("URL: {}", kiss.gist.html_url);

    Ok(())
}

/// Clone a kiss into the current directory so it can be edited and
/// pushed back over the gist's push URL.
pub async fn edit(
    client: &GithubClient,
    config: &Config,
    user: Option<&str>,
    seq: &[String],
) -> Result<()> {
    let kisses = select_kisses(client, config, user, seq).await?;
    let kiss = choose_one(&kisses, "edit")?;

    let dirname = slug(&kiss.name);
    let cwd = std::env::current_dir().context("Could not determine current directory")?;
    if cwd.join(&dirname).exists() {
        bail!("Directory ./{} already exists", dirname);
    }

    run_command("git", &["clone", &kiss.gist.git_push_url, &dirname], &cwd, None)
        .await
        .with_context(|| format!("Cloning \"{}\" failed", kiss.name))?;

    println!("Cloned \"{}\" into ./{}", kiss.name, dirname);
    println!("Edit, commit, and `git push` to update the kiss.");
    Ok(())
}

/// Shared pipeline: fetch the gist listing, build the predicate, filter.
async fn select_kisses(
    client: &GithubClient,
    config: &Config,
    user: Option<&str>,
    seq: &[String],
) -> Result<Vec<Kiss>> {
    let user = config.resolve_user(user);
    let gists = client.list_gists(&user).await?;

    let tokens = if seq.is_empty() { None } else { Some(seq) };
    let predicate = build_matcher(tokens)?;

    let kisses = filter_kisses(&gists, &predicate);
    if kisses.is_empty() {
        bail!("No matching kisses");
    }
    Ok(kisses)
}

/// Prompt for a choice when the sequence matched more than one kiss.
fn choose_one<'a>(kisses: &'a [Kiss], verb: &str) -> Result<&'a Kiss> {
    if kisses.len() == 1 {
        return Ok(&kisses[0]);
    }

    let mut stdout = std::io::stdout();
    prompt::show_kisses(&mut stdout, kisses)?;

    let stdin = std::io::stdin();
    prompt::choose_kiss(
        &mut stdin.lock(),
        &mut stdout,
        &mut std::io::stderr(),
        kisses,
        &format!("Choose a kiss to {}", verb),
    )
}

/// Directory-safe form of a kiss name for `edit` clones.
fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for ch in name.to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch);
        } else if !out.ends_with('-') && !out.is_empty() {
            out.push('-');
        }
    }
    out.trim_end_matches('-').to_string()
}
