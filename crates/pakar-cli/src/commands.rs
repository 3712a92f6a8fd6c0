//! Subcommand implementations: drive a controller, then render its state.

use std::sync::Arc;

use pakar_client::PortalClient;
use pakar_core::{AsyncState, Direction, Metric, Model, ScoreOrdering, SearchQuery};
use pakar_session::{
    DirectoryController, RecommendController, SystemClipboard, TranslateController,
};

pub async fn search(
    client: PortalClient,
    topic: String,
    model: Model,
    metric: Metric,
) -> anyhow::Result<()> {
    let controller = RecommendController::new(Arc::new(client));
    controller
        .search(SearchQuery::new(topic, model, metric))
        .await;

    match controller.results() {
        AsyncState::Idle => println!("Please enter a topic to begin your search."),
        AsyncState::Ready(researchers) if researchers.is_empty() => {
            println!("No results found. Please try a different query.");
        }
        AsyncState::Ready(researchers) => {
            let presentation = controller
                .score_presentation()
                .unwrap_or_else(|| metric.presentation());
            let ordering = match presentation.ordering {
                ScoreOrdering::HigherIsBetter => "higher is better",
                ScoreOrdering::LowerIsBetter => "lower is better",
            };
            println!("Ranked by {metric} ({ordering}):");

            for (rank, researcher) in researchers.iter().enumerate() {
                print!("#{} {}", rank + 1, researcher.name);
                if let Some(faculty) = &researcher.faculty {
                    print!(" [{faculty}]");
                }
                println!();
                println!("    {}: {:.4}", presentation.label, researcher.score);
            }
        }
        AsyncState::Failed(message) => anyhow::bail!(message),
        AsyncState::Pending => {}
    }

    Ok(())
}

pub async fn faculties(client: PortalClient) -> anyhow::Result<()> {
    let controller = DirectoryController::new(Arc::new(client));
    controller.load_faculties().await;

    match controller.faculties() {
        AsyncState::Ready(faculties) => {
            for faculty in faculties {
                println!("{faculty}");
            }
        }
        AsyncState::Failed(message) => anyhow::bail!(message),
        AsyncState::Idle | AsyncState::Pending => {}
    }

    Ok(())
}

pub async fn faculty(client: PortalClient, name: String) -> anyhow::Result<()> {
    let controller = DirectoryController::new(Arc::new(client));
    controller.select_faculty(&name).await;

    match controller.selected() {
        AsyncState::Ready(data) => {
            println!("{}", data.faculty);
            for (department, researchers) in controller.sorted_departments().unwrap_or_default() {
                println!("\n{department}");
                for researcher in researchers {
                    println!("  {} ({})", researcher.name, researcher.research_center);
                    if researcher.focus_topics.is_empty() {
                        println!("    Focus topics: N/A");
                    } else {
                        println!("    Focus topics: {}", researcher.focus_topics.join(", "));
                    }
                }
            }
        }
        AsyncState::Failed(message) => anyhow::bail!(message),
        AsyncState::Idle | AsyncState::Pending => {}
    }

    Ok(())
}

pub async fn translate(
    client: PortalClient,
    text: String,
    direction: Direction,
    copy: bool,
) -> anyhow::Result<()> {
    let controller = TranslateController::new(Arc::new(client));
    controller.set_source_text(text);
    if controller.direction() != direction {
        controller.swap_direction();
    }
    controller.translate().await;

    match controller.result() {
        AsyncState::Ready(translation) => {
            println!("{translation}");
            if copy {
                // A clipboard failure is a one-shot notice, not a command failure.
                match controller.copy_result(&SystemClipboard) {
                    Ok(()) => eprintln!("Copied to clipboard."),
                    Err(err) => eprintln!("Failed to copy text: {err}"),
                }
            }
        }
        AsyncState::Failed(message) => anyhow::bail!(message),
        AsyncState::Idle | AsyncState::Pending => {}
    }

    Ok(())
}
