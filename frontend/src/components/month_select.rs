use chrono::{Datelike, Local, Month};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MonthSelectProps {
    /// Selected month as `YYYY-MM`, or empty for none
    pub value: String,
    /// Callback when a month is picked
    pub on_change: Callback<String>,
    #[prop_or_default]
    pub id: Option<AttrValue>,
}

/// `YYYY-MM` identifier for a month
pub fn month_value(year: i32, month: u32) -> String {
    format!("{:04}-{:02}", year, month)
}

/// Split a `YYYY-MM` identifier back into year and month
pub fn parse_month_value(value: &str) -> Option<(i32, u32)> {
    let (year, month) = value.split_once('-')?;
    let year = year.parse::<i32>().ok()?;
    let month = month.parse::<u32>().ok()?;
    (1..=12).contains(&month).then_some((year, month))
}

/// Value/label pairs for every month of `year`
pub fn month_options(year: i32) -> Vec<(String, String)> {
    (1..=12u32)
        .map(|month| {
            let name = u8::try_from(month)
                .ok()
                .and_then(|m| Month::try_from(m).ok())
                .map(|m| m.name())
                .unwrap_or_default();
            (month_value(year, month), format!("{} {}", name, year))
        })
        .collect()
}

#[function_component(MonthSelect)]
pub fn month_select(props: &MonthSelectProps) -> Html {
    let display_year = use_state(|| {
        parse_month_value(&props.value)
            .map(|(year, _)| year)
            .unwrap_or_else(|| Local::now().year())
    });

    let on_prev_year = {
        let display_year = display_year.clone();
        Callback::from(move |_: MouseEvent| display_year.set(*display_year - 1))
    };

    let on_next_year = {
        let display_year = display_year.clone();
        Callback::from(move |_: MouseEvent| display_year.set(*display_year + 1))
    };

    let on_select = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(select.value());
        })
    };

    let options = month_options(*display_year);
    let has_selection = options.iter().any(|(value, _)| *value == props.value);

    html! {
        <div class="month-select">
            <button type="button" class="month-select-nav" onclick={on_prev_year}>
                {"‹"}
            </button>
            <select id={props.id.clone()} class="month-select-input" onchange={on_select}>
                <option value="" disabled=true selected={!has_selection}>{"Select month"}</option>
                {for options.into_iter().map(|(value, label)| {
                    let selected = value == props.value;
                    html! { <option value={value} selected={selected}>{label}</option> }
                })}
            </select>
            <button type="button" class="month-select-nav" onclick={on_next_year}>
                {"›"}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_value_format() {
        assert_eq!(month_value(2024, 5), "2024-05");
        assert_eq!(month_value(2024, 12), "2024-12");
    }

    #[test]
    fn test_parse_month_value() {
        assert_eq!(parse_month_value("2024-05"), Some((2024, 5)));
        assert_eq!(parse_month_value("2024-13"), None);
        assert_eq!(parse_month_value("2024"), None);
        assert_eq!(parse_month_value(""), None);
    }

    #[test]
    fn test_month_options_cover_the_year() {
        let options = month_options(2024);
        assert_eq!(options.len(), 12);
        assert_eq!(options[0], ("2024-01".to_string(), "January 2024".to_string()));
        assert_eq!(options[4], ("2024-05".to_string(), "May 2024".to_string()));
        assert_eq!(options[11].0, "2024-12");
    }
}
