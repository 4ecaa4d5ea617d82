use std::env;

use anyhow::Context;
use portfolio_dashboard::{
    assets::AssetResolver,
    settings::AppConfig,
    use_cases::workflows::flatten_logs,
    utils::duration::format_duration_ms,
    utils::markdown::{is_valid_markdown, safe_markdown_to_html},
    Dashboard,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = AppConfig::new().context("failed to load configuration")?;
    tracing::info!("Loaded configuration: {:?}", config);

    let dashboard = Dashboard::new(&config).context("failed to build API clients")?;

    let page = env::args().nth(1).unwrap_or_else(|| "projects".to_string());
    match page.as_str() {
        "projects" => render_projects(&dashboard).await,
        "deployments" => {
            let project_id = env::args().nth(2);
            render_deployments(&dashboard, project_id.as_deref()).await;
        }
        "repos" => render_repos(&dashboard).await?,
        "logs" => render_logs(&dashboard).await?,
        "readme" => {
            let reference = env::args().nth(2);
            render_readme(&dashboard, reference.as_deref()).await?;
        }
        other => {
            eprintln!(
                "unknown page: {other} (expected projects | deployments | repos | logs | readme)"
            );
            std::process::exit(2);
        }
    }

    Ok(())
}

async fn render_projects(dashboard: &Dashboard) {
    let view = dashboard.projects.assemble().await;
    if !view.complete {
        eprintln!("failed to load data");
    }

    if view.projects.is_empty() {
        println!("No data available");
    }

    let resolver = AssetResolver::new(dashboard.api.clone());
    for project in &view.projects {
        let badge = view
            .status_of(project)
            .map(|status| format!(" [{}]", status.name))
            .unwrap_or_default();
        println!("{} v{}{}", project.title, project.current_version, badge);
        println!("  {}", project.description);
        if !project.technologies.is_empty() {
            println!("  tech: {}", project.technologies.join(", "));
        }
        if let Some(image) = resolver.resolve(Some(project.image_web.as_str())).await {
            println!("  image: {image}");
        }
    }

    if !view.social_links.is_empty() {
        println!("--");
        for link in &view.social_links {
            println!("{}: {}", link.label, link.url);
        }
    }
}

async fn render_deployments(dashboard: &Dashboard, project_id: Option<&str>) {
    let view = dashboard.deployments.assemble(project_id).await;
    if !view.complete {
        eprintln!("failed to load data");
    }

    if view.deployments.is_empty() {
        println!("No data available");
        return;
    }

    for deployment in &view.deployments {
        let catalog = view
            .status_of(deployment)
            .map(|status| format!(" ({})", status.description))
            .unwrap_or_default();
        println!(
            "{} {} by {} via {} {}s [{}]{}",
            deployment.version,
            deployment.status,
            deployment.actor,
            deployment.source,
            deployment.duration_in_seconds,
            deployment.badge().label(),
            catalog,
        );
    }
}

async fn render_repos(dashboard: &Dashboard) -> anyhow::Result<()> {
    let repos = dashboard.workflows.assemble(false).await?;
    if repos.is_empty() {
        println!("No data available");
        return Ok(());
    }

    for repo in &repos {
        println!(
            "{}: {} workflows, {} ok, {} failed, {}",
            repo.name,
            repo.total_workflows,
            repo.successful_deployments,
            repo.failed_deployments,
            format_duration_ms(repo.total_deployment_time),
        );
    }
    Ok(())
}

async fn render_readme(dashboard: &Dashboard, reference: Option<&str>) -> anyhow::Result<()> {
    let resolver = AssetResolver::new(dashboard.api.clone());

    match resolver.fetch_text(reference).await? {
        Some(markdown) if is_valid_markdown(&markdown) => {
            println!("{}", safe_markdown_to_html(&markdown));
        }
        _ => println!("No data available"),
    }
    Ok(())
}

async fn render_logs(dashboard: &Dashboard) -> anyhow::Result<()> {
    let repos = dashboard.workflows.assemble(true).await?;
    let rows = flatten_logs(&repos);
    if rows.is_empty() {
        println!("No data available");
        return Ok(());
    }

    for row in &rows {
        println!(
            "{} {} {} {} by {} {}",
            row.repository,
            row.log.workflow,
            row.log.status,
            row.log.conclusion,
            row.log.actor,
            format_duration_ms(row.log.duration),
        );
    }
    Ok(())
}
