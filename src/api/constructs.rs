use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::api::client::{ApiError, FlyBaseClient};

/// Fetches all construct alleles of a gene, with their constructs,
/// regulatory regions, tag uses, and tagged-with tools.
const ALLELES_BY_GENE_QUERY: &str = "\
query($fbgn:String!) {
    gene:allelesByGene(fbgn:$fbgn, isConstruct: true) {
        id
        symbol
        alleles {
            id
            symbol
            constructs {
                id
                symbol
            }
            regRegions {
                id
                symbol
            }
            tagUses {
                id
                name
            }
            taggedWith {
                id
                symbol
            }
        }
    }
}";

#[derive(Serialize)]
struct GeneVariables<'a> {
    fbgn: &'a str,
}

#[derive(Deserialize)]
struct AllelesByGene {
    gene: Option<GeneAlleles>,
}

/// A gene with its transgenic construct alleles
#[derive(Debug, Clone, Deserialize)]
pub struct GeneAlleles {
    pub id: String,
    pub symbol: String,
    #[serde(default)]
    pub alleles: Vec<Allele>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Allele {
    pub id: String,
    pub symbol: String,
    /// Transgenic constructs (FBtp)
    #[serde(default)]
    pub constructs: Vec<Entity>,
    /// Regulatory regions (FBgn or FBto)
    #[serde(default)]
    pub reg_regions: Vec<Entity>,
    /// Controlled-vocabulary tag uses (FBcv)
    #[serde(default)]
    pub tag_uses: Vec<TagUse>,
    /// Tagging tools (FBto)
    #[serde(default)]
    pub tagged_with: Vec<Entity>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Entity {
    pub id: String,
    pub symbol: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TagUse {
    pub id: String,
    pub name: String,
}

/// Fetch the construct alleles of `fbgn`.
///
/// Returns `None` when FlyBase knows no construct alleles for the gene.
///
/// # Errors
///
/// Returns an error if the request or the query fails.
pub fn fetch_construct_alleles(
    client: &FlyBaseClient,
    fbgn: &str,
) -> Result<Option<GeneAlleles>, ApiError> {
    let variables = GeneVariables { fbgn };
    let response: AllelesByGene = client.execute(ALLELES_BY_GENE_QUERY, &variables)?;
    Ok(response.gene)
}

fn join_entities(entities: &[Entity]) -> String {
    entities
        .iter()
        .map(|e| format!("{} ({})", e.id, e.symbol))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Write the per-allele report for one gene.
///
/// Each allele gets a `Constructs:` line; regulatory regions, tag uses, and
/// tagged-with lines appear only when non-empty.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_report<W: Write>(out: &mut W, fbgn: &str, gene: &GeneAlleles) -> io::Result<()> {
    for allele in &gene.alleles {
        let fbal = &allele.id;
        writeln!(out, "{fbgn} {fbal} Constructs: {}", join_entities(&allele.constructs))?;
        if !allele.reg_regions.is_empty() {
            writeln!(out, "{fbgn} {fbal} Reg region: {}", join_entities(&allele.reg_regions))?;
        }
        if !allele.tag_uses.is_empty() {
            let tags = allele
                .tag_uses
                .iter()
                .map(|t| format!("{} ({})", t.id, t.name))
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(out, "{fbgn} {fbal} Tag Uses: {tags}")?;
        }
        if !allele.tagged_with.is_empty() {
            writeln!(out, "{fbgn} {fbal} Tagged With: {}", join_entities(&allele.tagged_with))?;
        }
    }
    Ok(())
}
