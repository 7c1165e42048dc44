use clap::Parser;
use clap::Subcommand;
use emd::*;

#[derive(Parser)]
#[command(author, version, about = "Earth Mover's Distance between histograms", long_about = None)]
pub struct Cli {
    #[arg(short, long, global = true, help = "Log pipeline steps to stderr")]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(
        about = "Distance between two histograms under a distance matrix",
        alias = "dist"
,
        allow_negative_numbers = true
    )]
    Distance {
        #[arg(long, required = true, help = "JSON array of bin masses")]
        first: String,
        #[arg(long, required = true, help = "JSON array of bin masses")]
        second: String,
        #[arg(long, required = true, help = "JSON array of distance matrix rows")]
        metric: String,
        #[arg(long, help = "Cost per unit of unmatched mass [default: largest distance]")]
        penalty: Option<Energy>,
        #[arg(long, default_value = "simplex")]
        backend: Backend,
        #[arg(long, help = "Also print the optimal flow as JSON")]
        flow: bool,
    },
    #[command(
        about = "Distance between two raw sample collections",
        alias = "smp"
,
        allow_negative_numbers = true
    )]
    Samples {
        #[arg(long, required = true, help = "JSON array of samples")]
        first: String,
        #[arg(long, required = true, help = "JSON array of samples")]
        second: String,
        #[arg(long, default_value = "auto", help = "Bin count or estimator name")]
        bins: Bins,
        #[arg(long, num_args = 2, value_names = ["LOW", "HIGH"])]
        range: Option<Vec<Energy>>,
        #[arg(long, help = "Compare raw counts instead of fractions")]
        counts: bool,
        #[arg(long, help = "Cost per unit of unmatched mass [default: largest distance]")]
        penalty: Option<Energy>,
        #[arg(long, default_value = "simplex")]
        backend: Backend,
        #[arg(long, help = "Plot both histograms to stderr")]
        plot: bool,
    },
}

impl Command {
    pub fn run(self) -> anyhow::Result<()> {
        match self {
            Self::Distance {
                first,
                second,
                metric,
                penalty,
                backend,
                flow,
            } => {
                let ref first = parse::<Vec<Energy>>("--first", &first)?;
                let ref second = parse::<Vec<Energy>>("--second", &second)?;
                let ref metric = parse::<Metric>("--metric", &metric)?;
                let (cost, plan) = emd_with_flow(first, second, metric, penalty, backend)?;
                println!("{}", cost);
                if flow {
                    println!("{}", serde_json::to_string(&plan)?);
                }
                Ok(())
            }
            Self::Samples {
                first,
                second,
                bins,
                range,
                counts,
                penalty,
                backend,
                plot,
            } => {
                let first = parse::<Vec<Energy>>("--first", &first)?;
                let second = parse::<Vec<Energy>>("--second", &second)?;
                let options = Options::default()
                    .bins(bins)
                    .normalized(!counts)
                    .penalty(penalty)
                    .backend(backend);
                let ref options = match range.as_deref() {
                    Some(&[lo, hi]) => options.range((lo, hi)),
                    _ => options,
                };
                let samples = Samples::new(first.as_slice(), second.as_slice(), options)?;
                let edges = samples.edges();
                log::info!("{} bins over [{}, {}]", edges.n(), edges.lo(), edges.hi());
                if plot {
                    eprintln!("{}", samples.first());
                    eprintln!("{}", samples.second());
                }
                println!("{}", samples.earthmover(options).distance()?);
                Ok(())
            }
        }
    }
}

fn parse<T>(flag: &str, json: &str) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(json).map_err(|e| anyhow::anyhow!("invalid {}: {}", flag, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn negative_range() {
        let cli = Cli::try_parse_from([
            "emd", "samples", "--first", "[-3,-1,2]", "--second", "[0,1,2]", "--range", "-5", "5",
        ])
        .unwrap();
        match cli.command {
            Command::Samples { range, .. } => assert_eq!(range, Some(vec![-5., 5.])),
            _ => panic!("expected samples"),
        }
    }
    #[test]
    fn sentinel_penalty() {
        let cli = Cli::try_parse_from([
            "emd", "distance", "--first", "[0,1]", "--second", "[5,3]", "--metric",
            "[[0,0.5],[0.5,0]]", "--penalty", "-1",
        ])
        .unwrap();
        match cli.command {
            Command::Distance { penalty, .. } => {
                assert_eq!(penalty, Some(-1.));
                assert_eq!(Penalty::from(penalty), Penalty::Diameter);
            }
            _ => panic!("expected distance"),
        }
    }
    #[test]
    fn negative_samples_run() {
        let cli = Cli::try_parse_from([
            "emd", "samples", "--first", "[-3,-1,2]", "--second", "[0,1,2]", "--range", "-5", "5",
            "--bins", "4",
        ])
        .unwrap();
        assert!(cli.command.run().is_ok());
    }
}
