use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct CreateArgs {
    /// Question text
    pub question: String,

    /// Email of the person asking
    #[arg(long, env = "QNA_USER")]
    pub created_by: String,

    /// Longer description of the question
    #[arg(long, short)]
    pub description: Option<String>,

    /// Answer text
    #[arg(long, short)]
    pub answer: Option<String>,

    /// Comma-delimited tags
    #[arg(long, short)]
    pub properties: Option<String>,

    /// Email of the last editor (defaults to --created-by)
    #[arg(long)]
    pub updated_by: Option<String>,

    /// Email of the assignee
    #[arg(long)]
    pub assigned_to: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Only list questions carrying all of these comma-delimited tags
    #[arg(long, short)]
    pub properties: Option<String>,

    /// Rank questions by relevance to this text
    #[arg(long, short = 'Q')]
    pub query: Option<String>,

    /// Include relevance scores in output (requires --query)
    #[arg(long)]
    pub scores: bool,
}

#[derive(Args, Debug, Clone)]
pub struct UpdateArgs {
    /// Question id
    pub id: String,

    /// New question text (an empty value is ignored)
    #[arg(long)]
    pub question: Option<String>,

    /// New description
    #[arg(long, short)]
    pub description: Option<String>,

    /// New answer
    #[arg(long, short)]
    pub answer: Option<String>,

    /// New comma-delimited tags
    #[arg(long, short)]
    pub properties: Option<String>,

    /// New author email
    #[arg(long)]
    pub created_by: Option<String>,

    /// Email of the editor (defaults to --created-by when given)
    #[arg(long)]
    pub updated_by: Option<String>,

    /// New assignee email
    #[arg(long)]
    pub assigned_to: Option<String>,
}
