use payloads::requests::PAGE_SIZES;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Current page (1-indexed)
    pub page: u32,
    pub total_pages: u32,
    /// Items per page
    pub limit: u32,
    pub on_prev: Callback<()>,
    pub on_next: Callback<()>,
    pub on_limit_change: Callback<u32>,
    pub on_refresh: Callback<()>,
}

#[function_component]
pub fn PaginationControls(props: &Props) -> Html {
    let Props {
        page,
        total_pages,
        limit,
        ..
    } = *props;

    let prev_disabled = page <= 1;
    let next_disabled = page >= total_pages;

    let on_prev = {
        let on_prev = props.on_prev.clone();
        Callback::from(move |_: MouseEvent| on_prev.emit(()))
    };

    let on_next = {
        let on_next = props.on_next.clone();
        Callback::from(move |_: MouseEvent| on_next.emit(()))
    };

    let on_refresh = {
        let on_refresh = props.on_refresh.clone();
        Callback::from(move |_: MouseEvent| on_refresh.emit(()))
    };

    let on_limit_change = {
        let on_limit_change = props.on_limit_change.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse::<u32>() {
                Ok(limit) => on_limit_change.emit(limit),
                Err(e) => tracing::warn!("bad page size {:?}: {e}", select.value()),
            }
        })
    };

    let button_class = |disabled: bool| {
        if disabled {
            "px-4 py-2 border border-neutral-300 dark:border-neutral-600 \
             rounded-md text-sm font-medium text-neutral-400 \
             dark:text-neutral-500 bg-neutral-100 dark:bg-neutral-800 \
             cursor-not-allowed"
        } else {
            "px-4 py-2 border border-neutral-300 dark:border-neutral-600 \
             rounded-md text-sm font-medium text-neutral-700 \
             dark:text-neutral-300 bg-white dark:bg-neutral-700 \
             hover:bg-neutral-50 dark:hover:bg-neutral-600 \
             transition-colors duration-200"
        }
    };

    html! {
        <div class="flex flex-wrap items-center gap-3 mb-4">
            <button
                onclick={on_prev}
                disabled={prev_disabled}
                class={button_class(prev_disabled)}
            >
                {"Prev"}
            </button>

            <span class="text-sm text-neutral-600 dark:text-neutral-400">
                {format!("Page {page} / {total_pages}")}
            </span>

            <button
                onclick={on_next}
                disabled={next_disabled}
                class={button_class(next_disabled)}
            >
                {"Next"}
            </button>

            <label class="flex items-center gap-2 text-sm text-neutral-600 dark:text-neutral-400">
                {"Limit:"}
                <select
                    onchange={on_limit_change}
                    class="px-2 py-1 border border-neutral-300 dark:border-neutral-600
                           rounded-md bg-white dark:bg-neutral-700"
                >
                    { for PAGE_SIZES.iter().map(|size| html! {
                        <option value={size.to_string()} selected={*size == limit}>
                            {size}
                        </option>
                    }) }
                </select>
            </label>

            <button onclick={on_refresh} class={button_class(false)}>
                {"Refresh"}
            </button>
        </div>
    }
}
