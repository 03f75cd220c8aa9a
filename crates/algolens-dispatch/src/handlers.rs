//! Canonical event choreographies.

use std::cell::Cell;
use std::rc::Rc;

use algolens_model::{Event, EventKind, Severity};
use algolens_scene::{Effect, SceneOps};

use crate::dispatcher::{DispatchContext, Dispatcher};
use crate::plan::AnimationPlan;

/// Install the canonical handler for every event kind.
pub fn register_defaults(dispatcher: &mut Dispatcher) {
    dispatcher.register(EventKind::Highlight, highlight);
    dispatcher.register(EventKind::Compare, compare);
    dispatcher.register(EventKind::Swap, swap);
    dispatcher.register(EventKind::Message, message);
    dispatcher.register(EventKind::Complete, complete);
    dispatcher.register(EventKind::Validate, validate);
}

/// `Highlight(slot)`: one immediate step toggling the highlight on.
fn highlight(event: &Event, _ctx: &DispatchContext) -> AnimationPlan {
    let Event::Highlight { slot } = *event else {
        return AnimationPlan::empty();
    };
    AnimationPlan::instant(move |scene| scene.set_highlighted(slot, true))
}

/// `Compare(a, b)`: lift both slots, hold, settle. No data changes.
fn compare(event: &Event, ctx: &DispatchContext) -> AnimationPlan {
    let Event::Compare { a, b } = *event else {
        return AnimationPlan::empty();
    };
    AnimationPlan::builder()
        .step(ctx.timing.emphasis, move |scene| {
            scene.play_effect(a, Effect::Lift)?;
            scene.play_effect(b, Effect::Lift)
        })
        .step(0, move |scene| {
            scene.play_effect(a, Effect::Settle)?;
            scene.play_effect(b, Effect::Settle)
        })
        .build()
}

/// `Swap(a, b)`: highlight → lift → exchange → settle → restore highlights.
///
/// The first step records which of the two slots were highlighted before
/// the choreography; the last step reinstates that state on the slots the
/// objects ended up at, so a pre-existing highlight survives the swap on
/// exactly one slot.
fn swap(event: &Event, ctx: &DispatchContext) -> AnimationPlan {
    let Event::Swap { a, b } = *event else {
        return AnimationPlan::empty();
    };
    let timing = ctx.timing;
    let prior = Rc::new(Cell::new((false, false)));
    let record = Rc::clone(&prior);
    let restore = Rc::clone(&prior);

    AnimationPlan::builder()
        .step(0, move |scene| {
            record.set((scene.is_highlighted(a)?, scene.is_highlighted(b)?));
            scene.set_highlighted(a, true)?;
            scene.set_highlighted(b, true)
        })
        .step(timing.emphasis, move |scene| {
            scene.play_effect(a, Effect::Lift)?;
            scene.play_effect(b, Effect::Lift)
        })
        .step(timing.exchange, move |scene| scene.swap_slots(a, b))
        .step(timing.emphasis, move |scene| {
            scene.play_effect(a, Effect::Settle)?;
            scene.play_effect(b, Effect::Settle)
        })
        .step(0, move |scene| {
            // The objects traded slots, so the recorded states trade too.
            let (a_was, b_was) = restore.get();
            scene.set_highlighted(a, b_was)?;
            scene.set_highlighted(b, a_was)
        })
        .build()
}

/// `Message(text, severity)`: one immediate status update.
fn message(event: &Event, _ctx: &DispatchContext) -> AnimationPlan {
    let Event::Message { text, severity } = event else {
        return AnimationPlan::empty();
    };
    let text = text.clone();
    let severity = *severity;
    AnimationPlan::instant(move |scene| scene.set_status_text(&text, severity))
}

/// `Complete`: terminal visual state.
fn complete(_event: &Event, _ctx: &DispatchContext) -> AnimationPlan {
    AnimationPlan::instant(|scene| {
        scene.clear_highlights()?;
        scene.set_status_text("Algorithm complete", Severity::Success)
    })
}

/// `Validate`: reserved; animates nothing.
fn validate(_event: &Event, _ctx: &DispatchContext) -> AnimationPlan {
    AnimationPlan::empty()
}
