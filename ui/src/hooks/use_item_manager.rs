use std::rc::Rc;

use yew::prelude::*;
use yewdux::prelude::*;

use crate::{
    effects,
    get_api_client,
    state::{Effect, ItemManager},
};

/// Dispatches actions against the item manager store, running whatever
/// backend calls they produce.
#[derive(Clone)]
pub struct ItemActions {
    dispatch: Dispatch<ItemManager>,
}

impl ItemActions {
    /// Apply `action` to the store. If it asks for a backend call, run it in
    /// the background along with any reload that follows.
    pub fn perform(
        &self,
        action: impl FnOnce(&mut ItemManager) -> Option<Effect>,
    ) {
        let mut effect = None;
        self.dispatch.reduce_mut(|manager| effect = action(manager));
        if let Some(effect) = effect {
            spawn_effects(self.dispatch.clone(), effect);
        }
    }

    /// Build a callback that performs `action` with the emitted value.
    pub fn callback<T: 'static>(
        &self,
        action: impl Fn(&mut ItemManager, T) -> Option<Effect> + 'static,
    ) -> Callback<T> {
        let actions = self.clone();
        let action = Rc::new(action);
        Callback::from(move |value: T| {
            let action = action.clone();
            actions.perform(move |manager| action(manager, value));
        })
    }
}

fn spawn_effects(dispatch: Dispatch<ItemManager>, first: Effect) {
    yew::platform::spawn_local(async move {
        let client = get_api_client();
        let mut next = Some(first);
        while let Some(effect) = next.take() {
            let outcome = effects::run(&client, effect).await;
            dispatch.reduce_mut(|manager| next = manager.apply(outcome));
        }
    });
}

/// Hook to the shared item manager. Loads the first page on mount.
#[hook]
pub fn use_item_manager() -> (Rc<ItemManager>, ItemActions) {
    let (state, dispatch) = use_store::<ItemManager>();
    let actions = ItemActions { dispatch };

    {
        let actions = actions.clone();
        use_effect_with((), move |_| {
            actions.perform(|manager| Some(manager.load()));
        });
    }

    (state, actions)
}
