use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    pub subtitle: AttrValue,
    pub children: Children,
    #[prop_or_default]
    pub align_left: bool,
}

#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    html! {
        <div class={classes!("section-header", props.align_left.then(|| "align-left"))}>
            <div class="eyebrow">{ props.subtitle.clone() }</div>
            <h2 class="gradient-text">{ for props.children.iter() }</h2>
        </div>
    }
}
