use crate::cmd::Settings;
use crate::output::print_json;
use anyhow::Context;
use chrono::{NaiveDate, Utc};
use legis_core::transition::apply;
use legis_core::{
    ActionText, ClassifiedAction, Classifier, Detail, ItemType, LegislativeItem, LifeCycleStatus,
    MatchContext,
};
use serde::Serialize;

pub struct Args {
    pub text: String,
    pub item_type: String,
    pub level: u8,
    pub status: String,
    pub title: Option<String>,
    pub date: Option<NaiveDate>,
}

#[derive(Serialize)]
struct ClassifyOutput {
    item: String,
    from: LifeCycleStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    to: Option<LifeCycleStatus>,
    action: ClassifiedAction,
}

pub fn run(settings: &Settings, args: Args, json: bool) -> anyhow::Result<()> {
    let config = settings.load_config()?;
    let processor = settings.processor(&config)?;

    let item_type: ItemType = args.item_type.parse()?;
    let status: LifeCycleStatus = args.status.parse()?;
    let item = LegislativeItem::new(item_type, 0, config.congress.unwrap_or(0))
        .with_title(args.title.unwrap_or_default());
    let date = args.date.unwrap_or_else(|| Utc::now().date_naive());
    let line = ActionText::new(args.text, date, args.level);

    let classifier: &Classifier = processor.classifier();
    let ctx = MatchContext::new(&line, &item).with_status(status);
    let mut action = classifier.classify(&ctx);
    let ten_day = config.ten_day_rule_ids().contains(&item.id());
    let to = apply(0, &action, &item, status, ten_day)
        .with_context(|| format!("no valid transition from {status}"))?;
    action.status = to;

    if json {
        return print_json(&ClassifyOutput {
            item: item.id(),
            from: status,
            to,
            action,
        });
    }

    println!("Kind:        {}", action.kind);
    if let Some(rule) = &action.rule {
        println!("Rule:        {rule}");
    }
    println!("Text:        {}", action.text);
    if let Some(vote) = &action.vote {
        let roll = vote
            .roll
            .as_deref()
            .map(|r| format!(" #{r}"))
            .unwrap_or_default();
        println!(
            "Vote:        {} {} {}{} -> {}",
            vote.chamber, vote.vote_type, vote.method, roll, vote.result
        );
        if vote.amended {
            println!("             amended");
        }
        if vote.suspension {
            println!("             under suspension of the rules");
        }
    }
    match &action.detail {
        Some(Detail::Calendar(name)) => println!("Calendar:    {name}"),
        Some(Detail::Law(law)) => println!("Law:         {law}"),
        Some(Detail::Committee(step)) => println!("Step:        {step:?}"),
        Some(Detail::Veto { pocket: true }) => println!("Veto:        pocket"),
        _ => {}
    }
    if let Some(committees) = &action.committees {
        println!("Committees:  {}", committees.join(", "));
    }
    if let Some(refs) = &action.item_refs {
        println!("Refs:        {}", refs.join(", "));
    }
    for citation in &action.citations {
        match &citation.label {
            Some(label) => println!("Citation:    {} ({label})", citation.reference),
            None => println!("Citation:    {}", citation.reference),
        }
    }
    match to {
        Some(next) => println!("Status:      {status} -> {next}"),
        None => println!("Status:      {status} (unchanged)"),
    }
    Ok(())
}
