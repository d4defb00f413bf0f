//! Analysis command - Report and check the gridworld parameter answers

use anyhow::{Result, bail};
use clap::Parser;

use crate::{
    analysis::Question,
    cli::output::{print_kv, print_section},
};

#[derive(Parser, Debug)]
#[command(about = "Report the gridworld parameter answers and verify them")]
pub struct AnalysisArgs {
    /// Only this question (e.g. bridge-crossing)
    #[arg(long, short = 'q')]
    pub question: Option<String>,

    /// Exit with an error if any answer fails verification
    #[arg(long, default_value_t = false)]
    pub strict: bool,
}

pub fn execute(args: AnalysisArgs) -> Result<()> {
    let questions: Vec<Question> = match &args.question {
        Some(name) => {
            let Some(question) = Question::ALL.into_iter().find(|q| q.name() == name.trim())
            else {
                let names: Vec<&str> = Question::ALL.iter().map(|q| q.name()).collect();
                bail!("unknown question '{name}' (available: {})", names.join(", "));
            };
            vec![question]
        }
        None => Question::ALL.to_vec(),
    };

    print_section("Gridworld analysis");
    let mut failures = Vec::new();
    for question in questions {
        let answer = match question.answer() {
            Some(parameters) => parameters.to_string(),
            None => "not possible".to_string(),
        };
        let verdict = match question.verify() {
            Some(true) => "verified",
            Some(false) => {
                failures.push(question);
                "FAILED"
            }
            None => "not checked",
        };
        print_kv(question.name(), &format!("{answer} [{verdict}]"));
    }

    if args.strict && !failures.is_empty() {
        let names: Vec<&str> = failures.iter().map(|q| q.name()).collect();
        bail!("answers failed verification: {}", names.join(", "));
    }
    Ok(())
}
