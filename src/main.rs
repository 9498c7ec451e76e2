use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use floorplan::designer::{blank_plan, seeded_plan, PlanShape};
use floorplan::{
    format_area, init_logging, load_plan_file, plan_total_area, save_plan_file, Config, LengthUnit,
};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the areas of a plan document
    Summary {
        /// Plan document (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
    /// Write a new plan document
    New {
        /// Plan name
        #[arg(long)]
        name: Option<String>,

        /// Canvas width in plan units
        #[arg(long)]
        width: Option<f64>,

        /// Canvas height in plan units
        #[arg(long)]
        height: Option<f64>,

        /// Length unit (mm, cm, m, in, ft)
        #[arg(long)]
        units: Option<LengthUnit>,

        /// Start with a few example rooms
        #[arg(long)]
        seeded: bool,

        /// Output file
        #[arg(short, long, value_name = "FILE", default_value = "plan.json")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging()?;

    match cli.command {
        Commands::Summary { input } => {
            let plan = load_plan_file(&input)?;
            println!(
                "{} ({} x {} {}), {} areas, {} groups",
                plan.meta.name,
                plan.canvas.width,
                plan.canvas.height,
                plan.units,
                plan.areas.len(),
                plan.area_groups.len()
            );
            for area in &plan.areas {
                println!(
                    "  {:<24} {:<13} {}",
                    area.name,
                    area.shape.kind().to_string(),
                    format_area(area.shape.area(), plan.units)
                );
            }
            println!("Total: {}", format_area(plan_total_area(&plan), plan.units));
        }
        Commands::New {
            name,
            width,
            height,
            units,
            seeded,
            output,
        } => {
            let mut config = Config::load_or_default()?;
            let defaults = &mut config.defaults;
            if let Some(name) = name {
                defaults.plan_name = name;
            }
            if let Some(width) = width {
                defaults.canvas_width = width;
            }
            if let Some(height) = height {
                defaults.canvas_height = height;
            }
            if let Some(units) = units {
                defaults.units = units;
            }
            config.validate()?;
            let plan = if seeded {
                seeded_plan(&config.defaults)
            } else {
                blank_plan(&config.defaults)
            };
            save_plan_file(&plan, &output)?;
            println!("Wrote {}", output.display());
        }
    }

    Ok(())
}
