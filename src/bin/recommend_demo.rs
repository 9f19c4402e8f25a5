//! Prints idea, node and search recommendations over the built-in seed catalog.

use std::sync::Arc;

use resource_recommender::{InMemoryCatalog, Recommender, ResourceType, SearchFilters};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_target(false).init();
    let recommender = Recommender::new(Arc::new(InMemoryCatalog::seeded()));

    for idea in ["technology", "agriculture", "underwater basket weaving"] {
        println!("== idea: {idea}");
        for s in recommender.recommend_for_idea(idea, "en", 5).await {
            println!(
                "  {:>2}  {:<32} [{}{}] {}",
                s.relevance_score,
                s.resource.title,
                s.resource.resource_type,
                if s.resource.is_featured { ", featured" } else { "" },
                s.reason
            );
        }
    }

    println!("== node: Finance");
    for s in recommender.recommend_for_node("Finance", "en").await {
        println!("  {:>2}  {}", s.relevance_score, s.resource.title);
    }

    let filters = SearchFilters {
        resource_type: Some(ResourceType::Course),
        ..Default::default()
    };
    println!("== search: \"planning\" (courses)");
    for s in recommender.search("planning", "en", &filters).await {
        println!("  {:>2}  {}", s.relevance_score, s.resource.title);
    }

    println!("recommend-demo done");
}
