use std::io::{self, BufWriter, Write};
use std::time::Duration;

use anyhow::Context;
use clap::Args;

use crate::api::client::{FlyBaseClient, DEFAULT_ENDPOINT};
use crate::api::constructs::{fetch_construct_alleles, write_report};
use crate::core::accession::is_flybase_id;

#[derive(Args)]
pub struct ConstructsArgs {
    /// FBgn IDs of the genes to report on
    #[arg(required = true)]
    pub genes: Vec<String>,

    /// GraphQL endpoint to query
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Seconds to pause between genes
    #[arg(long, default_value_t = 1)]
    pub delay: u64,
}

pub fn run(args: ConstructsArgs, verbose: bool) -> anyhow::Result<()> {
    for gene in &args.genes {
        if !is_flybase_id(gene) {
            anyhow::bail!("'{gene}' is not a FlyBase accession");
        }
    }

    let client = FlyBaseClient::new(&args.endpoint).context("failed to build HTTP client")?;
    if verbose {
        eprintln!("Querying {} for {} gene(s)", args.endpoint, args.genes.len());
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for (i, gene) in args.genes.iter().enumerate() {
        // rate-limit between genes
        if i > 0 && args.delay > 0 {
            std::thread::sleep(Duration::from_secs(args.delay));
        }

        let alleles = fetch_construct_alleles(&client, gene)
            .with_context(|| format!("query for {gene} failed"))?;
        match alleles {
            Some(result) => write_report(&mut out, gene, &result)?,
            None => eprintln!("No construct alleles found for {gene}"),
        }
        out.flush()?;
    }
    Ok(())
}
