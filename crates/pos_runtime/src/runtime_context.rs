//! Runtime provider and context wiring for the POS screen.
//!
//! The provider owns the reducer container, the runtime effect queue, the viewport listener, and
//! boot-time theme hydration. Rendering is left to the embedding application.

use std::rc::Rc;

use leptos::*;

use crate::{
    catalog::PriceBook,
    config::PosConfig,
    effect_executor,
    host::PosHostContext,
    model::PosState,
    reducer::{reduce_pos, PosAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading POS state and dispatching [`PosAction`] values.
pub struct PosRuntimeContext {
    /// Host service bundle for effects and environment queries.
    pub host: StoredValue<PosHostContext>,
    /// Reactive POS state signal.
    pub state: RwSignal<PosState>,
    /// Queue of runtime effects emitted by the reducer.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Price lookup used for new order lines.
    pub prices: StoredValue<Rc<dyn PriceBook>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<PosAction>,
}

impl PosRuntimeContext {
    pub fn dispatch_action(&self, action: PosAction) {
        self.dispatch.call(action);
    }
}

fn install_viewport_listener(runtime: PosRuntimeContext) {
    let resize = window_event_listener(ev::resize, move |_| {
        let viewport = runtime.host.get_value().viewport_size();
        runtime.dispatch_action(PosAction::ViewportResized { viewport });
    });
    on_cleanup(move || resize.remove());

    let viewport = runtime.host.get_value().viewport_size();
    runtime.dispatch_action(PosAction::ViewportResized { viewport });
}

fn install_runtime_orchestration(runtime: PosRuntimeContext) {
    install_viewport_listener(runtime);
    runtime
        .host
        .get_value()
        .install_boot_hydration(runtime.dispatch);
    effect_executor::install(runtime);
}

#[component]
/// Provides [`PosRuntimeContext`] to descendant components.
pub fn PosProvider(
    /// Runtime configuration; [`PosConfig::default`] when omitted.
    #[prop(optional)]
    config: Option<PosConfig>,
    /// Price lookup for new lines; a flat price from `config` when omitted.
    #[prop(optional)]
    prices: Option<Rc<dyn PriceBook>>,
    /// Host bundle; browser storage and window queries when omitted.
    #[prop(optional)]
    host: Option<PosHostContext>,
    children: Children,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let prices: Rc<dyn PriceBook> = match prices {
        Some(prices) => prices,
        None => Rc::new(config.flat_price_book()),
    };
    let host = store_value(host.unwrap_or_default());
    let prices = store_value(prices);
    let state = create_rw_signal(PosState::new(&config));
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let dispatch = Callback::new(move |action: PosAction| {
        let mut pos = state.get_untracked();
        let previous = pos.clone();

        let new_effects =
            prices.with_value(|prices| reduce_pos(&mut pos, action, prices.as_ref()));
        if pos != previous {
            state.set(pos);
        }
        if !new_effects.is_empty() {
            let mut queue = effects.get_untracked();
            queue.extend(new_effects);
            effects.set(queue);
        }
    });

    let runtime = PosRuntimeContext {
        host,
        state,
        effects,
        prices,
        dispatch,
    };

    provide_context(runtime);

    install_runtime_orchestration(runtime);

    children().into_view()
}

/// Returns the current [`PosRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`PosProvider`].
pub fn use_pos_runtime() -> PosRuntimeContext {
    use_context::<PosRuntimeContext>().expect("PosRuntimeContext not provided")
}
