use clap::Args;
use listing_advisor::advisor::engine::{RecommendationEngine, SellerProfile};
use listing_advisor::advisor::report::RecommendationView;
use listing_advisor::advisor::taxonomy::{Condition, Involvement, Timeline};
use listing_advisor::error::AppError;

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Desired sale timeline: fast, standard, or flexible
    #[arg(long, value_parser = crate::infra::parse_timeline)]
    pub(crate) timeline: Timeline,
    /// Acceptable seller involvement: minimal, moderate, or high
    #[arg(long, value_parser = crate::infra::parse_involvement)]
    pub(crate) involvement: Involvement,
    /// Home condition: needs_work, marketable, or showcase
    #[arg(long, value_parser = crate::infra::parse_condition)]
    pub(crate) condition: Condition,
    /// Emit the recommendation as JSON instead of a text summary
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let RecommendArgs {
        timeline,
        involvement,
        condition,
        json,
    } = args;

    let recommendation = RecommendationEngine::new().recommend(SellerProfile {
        timeline,
        involvement,
        condition,
    });
    let view = RecommendationView::from(&recommendation);

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", view.text_summary());
    }

    Ok(())
}
