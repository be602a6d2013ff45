// pointer hover micro-interactions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverEffect {
    // floating action buttons
    Grow,
    // social cards
    Lift,
}

impl HoverEffect {
    pub fn transform(self, hovered: bool) -> &'static str {
        match (self, hovered) {
            (HoverEffect::Grow, true) => "scale(1.1)",
            (HoverEffect::Grow, false) => "scale(1)",
            (HoverEffect::Lift, true) => "translateY(-5px)",
            (HoverEffect::Lift, false) => "translateY(0)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaving_restores_identity() {
        assert_eq!(HoverEffect::Grow.transform(true), "scale(1.1)");
        assert_eq!(HoverEffect::Grow.transform(false), "scale(1)");
        assert_eq!(HoverEffect::Lift.transform(true), "translateY(-5px)");
        assert_eq!(HoverEffect::Lift.transform(false), "translateY(0)");
    }
}
