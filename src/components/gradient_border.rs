use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GradientBorderProps {
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Translucent panel with a hairline border, used for cards and forms.
#[function_component(GradientBorder)]
pub fn gradient_border(props: &GradientBorderProps) -> Html {
    html! {
        <div class={classes!("gradient-border", props.class.clone())}>
            <div class="gradient-border-inner">
                { for props.children.iter() }
            </div>
        </div>
    }
}
