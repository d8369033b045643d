use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use xer_analytics::analytics::{
    critical_activities, critical_path_summary, resource_curve, resource_utilization,
    schedule_summary, wbs_hierarchy, WbsTreeNode,
};
use xer_analytics::dcma::run_assessment;
use xer_analytics::export::{write_assessment_csv, write_curve_csv, write_json};
use xer_analytics::read_thresholds;
use xer_parse::Model;

#[derive(Parser)]
#[command(name = "xer-cli", about = "Analyze Primavera P6 XER schedule exports")]
struct Opts {
    /// Path to the .xer file
    file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Schedule counts, histograms and the WBS tree
    Summary,
    /// List critical activities (zero float or driving path)
    Critical,
    /// Per-resource utilization totals
    Resources,
    /// Run the DCMA 14-point assessment
    Assess {
        #[arg(long, conflicts_with = "csv")]
        json: bool,
        #[arg(long)]
        csv: bool,
        /// Write to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Weekly time-phased curve for one resource
    Curve {
        /// Resource id from the RSRC table
        #[arg(long)]
        resource: String,
        #[arg(long, conflicts_with = "csv")]
        json: bool,
        #[arg(long)]
        csv: bool,
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let opts = Opts::parse();

    let text = std::fs::read_to_string(&opts.file)
        .with_context(|| format!("failed to read {}", opts.file.display()))?;
    let model = Model::parse(&text);
    tracing::debug!(
        activities = model.activities.len(),
        resources = model.resources.len(),
        "model loaded"
    );

    let project = model
        .first_project()
        .with_context(|| format!("no projects found in {}", opts.file.display()))?;
    let project_id = project.id.clone();
    println!("Project: {} ({})", project.display_name(), project_id);

    match opts.command {
        Command::Summary => summary(&model, &project_id),
        Command::Critical => critical(&model, &project_id),
        Command::Resources => resources(&model, &project_id),
        Command::Assess { json, csv, out } => assess(&model, &project_id, json, csv, out),
        Command::Curve {
            resource,
            json,
            csv,
            out,
        } => curve(&model, &resource, json, csv, out),
    }
}

fn summary(model: &Model, project_id: &str) -> anyhow::Result<()> {
    let summary = schedule_summary(model, project_id);

    println!(
        "{} activities, {} WBS nodes, {} resources, {} relationships, {} assignments",
        summary.total_activities,
        summary.total_wbs_nodes,
        summary.total_resources,
        summary.total_relationships,
        summary.total_assignments,
    );
    for (status, count) in &summary.status_histogram {
        println!("  {status}: {count}");
    }
    if let Some(duration) = &summary.duration {
        println!(
            "Durations: sum {:.0}h, mean {:.1}h, min {:.0}h, max {:.0}h",
            duration.sum_hours, duration.mean_hours, duration.min_hours, duration.max_hours
        );
    }

    println!("WBS:");
    for node in wbs_hierarchy(model, project_id) {
        print_wbs(&node, 1);
    }
    Ok(())
}

fn print_wbs(node: &WbsTreeNode, depth: usize) {
    println!(
        "{}{} ({} activities)",
        "  ".repeat(depth),
        node.name,
        node.total_activities
    );
    for child in &node.children {
        print_wbs(child, depth + 1);
    }
}

fn critical(model: &Model, project_id: &str) -> anyhow::Result<()> {
    let summary = critical_path_summary(model, project_id);
    println!(
        "{} of {} activities are critical ({:.1}%)",
        summary.critical_activities, summary.total_activities, summary.critical_pct
    );
    for activity in critical_activities(model, project_id) {
        println!(
            "  {} {} (float {:.0}h{})",
            activity.code,
            activity.name,
            activity.total_float_hours,
            if activity.driving_path { ", driving" } else { "" }
        );
    }
    Ok(())
}

fn resources(model: &Model, project_id: &str) -> anyhow::Result<()> {
    for u in resource_utilization(model, project_id) {
        println!(
            "{} ({}): target {:.1} / actual {:.1} units, target {:.2} / actual {:.2} cost, {} assignments",
            u.resource_name,
            u.resource_id,
            u.target_qty,
            u.actual_qty,
            u.target_cost,
            u.actual_cost,
            u.assignments.len()
        );
    }
    Ok(())
}

fn assess(
    model: &Model,
    project_id: &str,
    json: bool,
    csv: bool,
    out: Option<PathBuf>,
) -> anyhow::Result<()> {
    let thresholds = read_thresholds().context("failed to read thresholds config")?;
    let assessment = run_assessment(model, project_id, &thresholds);

    if csv {
        write_assessment_csv(&assessment, output(out)?)?;
        return Ok(());
    }
    if json {
        write_json(&assessment, output(out)?)?;
        return Ok(());
    }

    for point in &assessment.points {
        println!(
            "{:>2}. {:<22} {:<7} {}",
            point.point, point.title, point.status.to_string(), point.summary
        );
    }
    let s = &assessment.summary;
    println!(
        "Score: {}/100 (grade {}), {} passed, {} warnings, {} failed",
        s.score, s.grade, s.passed_points, s.warning_points, s.failed_points
    );
    Ok(())
}

fn curve(
    model: &Model,
    resource_id: &str,
    json: bool,
    csv: bool,
    out: Option<PathBuf>,
) -> anyhow::Result<()> {
    let curve = resource_curve(model, resource_id)
        .with_context(|| format!("no curve for resource {resource_id}"))?;

    if csv {
        write_curve_csv(&curve, output(out)?)?;
        return Ok(());
    }
    if json {
        write_json(&curve, output(out)?)?;
        return Ok(());
    }

    let name = curve
        .resource
        .as_ref()
        .map(|r| r.name.as_str())
        .unwrap_or("Unknown");
    println!("Curve for {name} ({resource_id}):");
    for bucket in &curve.time_based_data {
        println!(
            "  {} → {}: target {:.1}, actual {:.1} ({} activities)",
            bucket.bucket_start.format("%Y-%m-%d"),
            bucket.bucket_end.format("%Y-%m-%d"),
            bucket.weekly_target_qty,
            bucket.weekly_actual_qty,
            bucket.active_activities.len()
        );
    }
    Ok(())
}

/// Stdout, or the requested file.
fn output(out: Option<PathBuf>) -> anyhow::Result<Box<dyn io::Write>> {
    match out {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(io::stdout())),
    }
}
