//! The closed vocabulary of CSS property names.
//!
//! [`Property`] covers the standard CSS properties (plus a handful of widely
//! used vendor-prefixed ones). Names outside the vocabulary are not
//! representable; custom properties travel separately in
//! [`StyleProperties::vars`](crate::StyleProperties).

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::SchemaError;

macro_rules! define_properties {
    ($($variant:ident => $camel:literal, $css:literal;)*) => {
        /// A known CSS property.
        ///
        /// Properties are authored with their camelCase name (`backgroundColor`)
        /// and print with their CSS name (`background-color`). Both spellings
        /// are accepted by [`Property::from_name`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Property {
            $(
                #[doc = concat!("`", $css, "`")]
                $variant,
            )*
        }

        impl Property {
            /// Every known property, in declaration order.
            pub const ALL: &'static [Property] = &[$(Property::$variant),*];

            /// Returns the camelCase authoring name.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Property::$variant => $camel,)*
                }
            }

            /// Returns the hyphenated CSS name.
            pub fn css_name(self) -> &'static str {
                match self {
                    $(Property::$variant => $css,)*
                }
            }
        }
    };
}

define_properties! {
    AccentColor => "accentColor", "accent-color";
    AlignContent => "alignContent", "align-content";
    AlignItems => "alignItems", "align-items";
    AlignSelf => "alignSelf", "align-self";
    All => "all", "all";
    Animation => "animation", "animation";
    AnimationComposition => "animationComposition", "animation-composition";
    AnimationDelay => "animationDelay", "animation-delay";
    AnimationDirection => "animationDirection", "animation-direction";
    AnimationDuration => "animationDuration", "animation-duration";
    AnimationFillMode => "animationFillMode", "animation-fill-mode";
    AnimationIterationCount => "animationIterationCount", "animation-iteration-count";
    AnimationName => "animationName", "animation-name";
    AnimationPlayState => "animationPlayState", "animation-play-state";
    AnimationTimingFunction => "animationTimingFunction", "animation-timing-function";
    Appearance => "appearance", "appearance";
    AspectRatio => "aspectRatio", "aspect-ratio";
    BackdropFilter => "backdropFilter", "backdrop-filter";
    BackfaceVisibility => "backfaceVisibility", "backface-visibility";
    Background => "background", "background";
    BackgroundAttachment => "backgroundAttachment", "background-attachment";
    BackgroundBlendMode => "backgroundBlendMode", "background-blend-mode";
    BackgroundClip => "backgroundClip", "background-clip";
    BackgroundColor => "backgroundColor", "background-color";
    BackgroundImage => "backgroundImage", "background-image";
    BackgroundOrigin => "backgroundOrigin", "background-origin";
    BackgroundPosition => "backgroundPosition", "background-position";
    BackgroundPositionX => "backgroundPositionX", "background-position-x";
    BackgroundPositionY => "backgroundPositionY", "background-position-y";
    BackgroundRepeat => "backgroundRepeat", "background-repeat";
    BackgroundSize => "backgroundSize", "background-size";
    BlockSize => "blockSize", "block-size";
    Border => "border", "border";
    BorderBlock => "borderBlock", "border-block";
    BorderBlockColor => "borderBlockColor", "border-block-color";
    BorderBlockEnd => "borderBlockEnd", "border-block-end";
    BorderBlockStart => "borderBlockStart", "border-block-start";
    BorderBlockStyle => "borderBlockStyle", "border-block-style";
    BorderBlockWidth => "borderBlockWidth", "border-block-width";
    BorderBottom => "borderBottom", "border-bottom";
    BorderBottomColor => "borderBottomColor", "border-bottom-color";
    BorderBottomLeftRadius => "borderBottomLeftRadius", "border-bottom-left-radius";
    BorderBottomRightRadius => "borderBottomRightRadius", "border-bottom-right-radius";
    BorderBottomStyle => "borderBottomStyle", "border-bottom-style";
    BorderBottomWidth => "borderBottomWidth", "border-bottom-width";
    BorderCollapse => "borderCollapse", "border-collapse";
    BorderColor => "borderColor", "border-color";
    BorderEndEndRadius => "borderEndEndRadius", "border-end-end-radius";
    BorderEndStartRadius => "borderEndStartRadius", "border-end-start-radius";
    BorderImage => "borderImage", "border-image";
    BorderImageOutset => "borderImageOutset", "border-image-outset";
    BorderImageRepeat => "borderImageRepeat", "border-image-repeat";
    BorderImageSlice => "borderImageSlice", "border-image-slice";
    BorderImageSource => "borderImageSource", "border-image-source";
    BorderImageWidth => "borderImageWidth", "border-image-width";
    BorderInline => "borderInline", "border-inline";
    BorderInlineColor => "borderInlineColor", "border-inline-color";
    BorderInlineEnd => "borderInlineEnd", "border-inline-end";
    BorderInlineStart => "borderInlineStart", "border-inline-start";
    BorderInlineStyle => "borderInlineStyle", "border-inline-style";
    BorderInlineWidth => "borderInlineWidth", "border-inline-width";
    BorderLeft => "borderLeft", "border-left";
    BorderLeftColor => "borderLeftColor", "border-left-color";
    BorderLeftStyle => "borderLeftStyle", "border-left-style";
    BorderLeftWidth => "borderLeftWidth", "border-left-width";
    BorderRadius => "borderRadius", "border-radius";
    BorderRight => "borderRight", "border-right";
    BorderRightColor => "borderRightColor", "border-right-color";
    BorderRightStyle => "borderRightStyle", "border-right-style";
    BorderRightWidth => "borderRightWidth", "border-right-width";
    BorderSpacing => "borderSpacing", "border-spacing";
    BorderStartEndRadius => "borderStartEndRadius", "border-start-end-radius";
    BorderStartStartRadius => "borderStartStartRadius", "border-start-start-radius";
    BorderStyle => "borderStyle", "border-style";
    BorderTop => "borderTop", "border-top";
    BorderTopColor => "borderTopColor", "border-top-color";
    BorderTopLeftRadius => "borderTopLeftRadius", "border-top-left-radius";
    BorderTopRightRadius => "borderTopRightRadius", "border-top-right-radius";
    BorderTopStyle => "borderTopStyle", "border-top-style";
    BorderTopWidth => "borderTopWidth", "border-top-width";
    BorderWidth => "borderWidth", "border-width";
    Bottom => "bottom", "bottom";
    BoxDecorationBreak => "boxDecorationBreak", "box-decoration-break";
    BoxShadow => "boxShadow", "box-shadow";
    BoxSizing => "boxSizing", "box-sizing";
    BreakAfter => "breakAfter", "break-after";
    BreakBefore => "breakBefore", "break-before";
    BreakInside => "breakInside", "break-inside";
    CaptionSide => "captionSide", "caption-side";
    CaretColor => "caretColor", "caret-color";
    Clear => "clear", "clear";
    ClipPath => "clipPath", "clip-path";
    Color => "color", "color";
    ColorScheme => "colorScheme", "color-scheme";
    ColumnCount => "columnCount", "column-count";
    ColumnFill => "columnFill", "column-fill";
    ColumnGap => "columnGap", "column-gap";
    ColumnRule => "columnRule", "column-rule";
    ColumnRuleColor => "columnRuleColor", "column-rule-color";
    ColumnRuleStyle => "columnRuleStyle", "column-rule-style";
    ColumnRuleWidth => "columnRuleWidth", "column-rule-width";
    ColumnSpan => "columnSpan", "column-span";
    ColumnWidth => "columnWidth", "column-width";
    Columns => "columns", "columns";
    Contain => "contain", "contain";
    Container => "container", "container";
    ContainerName => "containerName", "container-name";
    ContainerType => "containerType", "container-type";
    Content => "content", "content";
    ContentVisibility => "contentVisibility", "content-visibility";
    CounterIncrement => "counterIncrement", "counter-increment";
    CounterReset => "counterReset", "counter-reset";
    CounterSet => "counterSet", "counter-set";
    Cursor => "cursor", "cursor";
    Direction => "direction", "direction";
    Display => "display", "display";
    EmptyCells => "emptyCells", "empty-cells";
    Filter => "filter", "filter";
    Flex => "flex", "flex";
    FlexBasis => "flexBasis", "flex-basis";
    FlexDirection => "flexDirection", "flex-direction";
    FlexFlow => "flexFlow", "flex-flow";
    FlexGrow => "flexGrow", "flex-grow";
    FlexShrink => "flexShrink", "flex-shrink";
    FlexWrap => "flexWrap", "flex-wrap";
    Float => "float", "float";
    Font => "font", "font";
    FontFamily => "fontFamily", "font-family";
    FontFeatureSettings => "fontFeatureSettings", "font-feature-settings";
    FontKerning => "fontKerning", "font-kerning";
    FontOpticalSizing => "fontOpticalSizing", "font-optical-sizing";
    FontSize => "fontSize", "font-size";
    FontSizeAdjust => "fontSizeAdjust", "font-size-adjust";
    FontStretch => "fontStretch", "font-stretch";
    FontStyle => "fontStyle", "font-style";
    FontSynthesis => "fontSynthesis", "font-synthesis";
    FontVariant => "fontVariant", "font-variant";
    FontVariantCaps => "fontVariantCaps", "font-variant-caps";
    FontVariantNumeric => "fontVariantNumeric", "font-variant-numeric";
    FontVariationSettings => "fontVariationSettings", "font-variation-settings";
    FontWeight => "fontWeight", "font-weight";
    Gap => "gap", "gap";
    Grid => "grid", "grid";
    GridArea => "gridArea", "grid-area";
    GridAutoColumns => "gridAutoColumns", "grid-auto-columns";
    GridAutoFlow => "gridAutoFlow", "grid-auto-flow";
    GridAutoRows => "gridAutoRows", "grid-auto-rows";
    GridColumn => "gridColumn", "grid-column";
    GridColumnEnd => "gridColumnEnd", "grid-column-end";
    GridColumnStart => "gridColumnStart", "grid-column-start";
    GridRow => "gridRow", "grid-row";
    GridRowEnd => "gridRowEnd", "grid-row-end";
    GridRowStart => "gridRowStart", "grid-row-start";
    GridTemplate => "gridTemplate", "grid-template";
    GridTemplateAreas => "gridTemplateAreas", "grid-template-areas";
    GridTemplateColumns => "gridTemplateColumns", "grid-template-columns";
    GridTemplateRows => "gridTemplateRows", "grid-template-rows";
    Height => "height", "height";
    Hyphens => "hyphens", "hyphens";
    ImageRendering => "imageRendering", "image-rendering";
    InlineSize => "inlineSize", "inline-size";
    Inset => "inset", "inset";
    InsetBlock => "insetBlock", "inset-block";
    InsetBlockEnd => "insetBlockEnd", "inset-block-end";
    InsetBlockStart => "insetBlockStart", "inset-block-start";
    InsetInline => "insetInline", "inset-inline";
    InsetInlineEnd => "insetInlineEnd", "inset-inline-end";
    InsetInlineStart => "insetInlineStart", "inset-inline-start";
    Isolation => "isolation", "isolation";
    JustifyContent => "justifyContent", "justify-content";
    JustifyItems => "justifyItems", "justify-items";
    JustifySelf => "justifySelf", "justify-self";
    Left => "left", "left";
    LetterSpacing => "letterSpacing", "letter-spacing";
    LineBreak => "lineBreak", "line-break";
    LineHeight => "lineHeight", "line-height";
    ListStyle => "listStyle", "list-style";
    ListStyleImage => "listStyleImage", "list-style-image";
    ListStylePosition => "listStylePosition", "list-style-position";
    ListStyleType => "listStyleType", "list-style-type";
    Margin => "margin", "margin";
    MarginBlock => "marginBlock", "margin-block";
    MarginBlockEnd => "marginBlockEnd", "margin-block-end";
    MarginBlockStart => "marginBlockStart", "margin-block-start";
    MarginBottom => "marginBottom", "margin-bottom";
    MarginInline => "marginInline", "margin-inline";
    MarginInlineEnd => "marginInlineEnd", "margin-inline-end";
    MarginInlineStart => "marginInlineStart", "margin-inline-start";
    MarginLeft => "marginLeft", "margin-left";
    MarginRight => "marginRight", "margin-right";
    MarginTop => "marginTop", "margin-top";
    Mask => "mask", "mask";
    MaskImage => "maskImage", "mask-image";
    MaskPosition => "maskPosition", "mask-position";
    MaskRepeat => "maskRepeat", "mask-repeat";
    MaskSize => "maskSize", "mask-size";
    MaxBlockSize => "maxBlockSize", "max-block-size";
    MaxHeight => "maxHeight", "max-height";
    MaxInlineSize => "maxInlineSize", "max-inline-size";
    MaxWidth => "maxWidth", "max-width";
    MinBlockSize => "minBlockSize", "min-block-size";
    MinHeight => "minHeight", "min-height";
    MinInlineSize => "minInlineSize", "min-inline-size";
    MinWidth => "minWidth", "min-width";
    MixBlendMode => "mixBlendMode", "mix-blend-mode";
    ObjectFit => "objectFit", "object-fit";
    ObjectPosition => "objectPosition", "object-position";
    Offset => "offset", "offset";
    OffsetDistance => "offsetDistance", "offset-distance";
    OffsetPath => "offsetPath", "offset-path";
    OffsetRotate => "offsetRotate", "offset-rotate";
    Opacity => "opacity", "opacity";
    Order => "order", "order";
    Orphans => "orphans", "orphans";
    Outline => "outline", "outline";
    OutlineColor => "outlineColor", "outline-color";
    OutlineOffset => "outlineOffset", "outline-offset";
    OutlineStyle => "outlineStyle", "outline-style";
    OutlineWidth => "outlineWidth", "outline-width";
    Overflow => "overflow", "overflow";
    OverflowAnchor => "overflowAnchor", "overflow-anchor";
    OverflowWrap => "overflowWrap", "overflow-wrap";
    OverflowX => "overflowX", "overflow-x";
    OverflowY => "overflowY", "overflow-y";
    OverscrollBehavior => "overscrollBehavior", "overscroll-behavior";
    OverscrollBehaviorX => "overscrollBehaviorX", "overscroll-behavior-x";
    OverscrollBehaviorY => "overscrollBehaviorY", "overscroll-behavior-y";
    Padding => "padding", "padding";
    PaddingBlock => "paddingBlock", "padding-block";
    PaddingBlockEnd => "paddingBlockEnd", "padding-block-end";
    PaddingBlockStart => "paddingBlockStart", "padding-block-start";
    PaddingBottom => "paddingBottom", "padding-bottom";
    PaddingInline => "paddingInline", "padding-inline";
    PaddingInlineEnd => "paddingInlineEnd", "padding-inline-end";
    PaddingInlineStart => "paddingInlineStart", "padding-inline-start";
    PaddingLeft => "paddingLeft", "padding-left";
    PaddingRight => "paddingRight", "padding-right";
    PaddingTop => "paddingTop", "padding-top";
    PageBreakAfter => "pageBreakAfter", "page-break-after";
    PageBreakBefore => "pageBreakBefore", "page-break-before";
    PageBreakInside => "pageBreakInside", "page-break-inside";
    Perspective => "perspective", "perspective";
    PerspectiveOrigin => "perspectiveOrigin", "perspective-origin";
    PlaceContent => "placeContent", "place-content";
    PlaceItems => "placeItems", "place-items";
    PlaceSelf => "placeSelf", "place-self";
    PointerEvents => "pointerEvents", "pointer-events";
    Position => "position", "position";
    Quotes => "quotes", "quotes";
    Resize => "resize", "resize";
    Right => "right", "right";
    Rotate => "rotate", "rotate";
    RowGap => "rowGap", "row-gap";
    Scale => "scale", "scale";
    ScrollBehavior => "scrollBehavior", "scroll-behavior";
    ScrollMargin => "scrollMargin", "scroll-margin";
    ScrollMarginBottom => "scrollMarginBottom", "scroll-margin-bottom";
    ScrollMarginLeft => "scrollMarginLeft", "scroll-margin-left";
    ScrollMarginRight => "scrollMarginRight", "scroll-margin-right";
    ScrollMarginTop => "scrollMarginTop", "scroll-margin-top";
    ScrollPadding => "scrollPadding", "scroll-padding";
    ScrollPaddingBottom => "scrollPaddingBottom", "scroll-padding-bottom";
    ScrollPaddingLeft => "scrollPaddingLeft", "scroll-padding-left";
    ScrollPaddingRight => "scrollPaddingRight", "scroll-padding-right";
    ScrollPaddingTop => "scrollPaddingTop", "scroll-padding-top";
    ScrollSnapAlign => "scrollSnapAlign", "scroll-snap-align";
    ScrollSnapStop => "scrollSnapStop", "scroll-snap-stop";
    ScrollSnapType => "scrollSnapType", "scroll-snap-type";
    ScrollbarColor => "scrollbarColor", "scrollbar-color";
    ScrollbarGutter => "scrollbarGutter", "scrollbar-gutter";
    ScrollbarWidth => "scrollbarWidth", "scrollbar-width";
    ShapeOutside => "shapeOutside", "shape-outside";
    TabSize => "tabSize", "tab-size";
    TableLayout => "tableLayout", "table-layout";
    TextAlign => "textAlign", "text-align";
    TextAlignLast => "textAlignLast", "text-align-last";
    TextDecoration => "textDecoration", "text-decoration";
    TextDecorationColor => "textDecorationColor", "text-decoration-color";
    TextDecorationLine => "textDecorationLine", "text-decoration-line";
    TextDecorationStyle => "textDecorationStyle", "text-decoration-style";
    TextDecorationThickness => "textDecorationThickness", "text-decoration-thickness";
    TextIndent => "textIndent", "text-indent";
    TextOverflow => "textOverflow", "text-overflow";
    TextRendering => "textRendering", "text-rendering";
    TextShadow => "textShadow", "text-shadow";
    TextTransform => "textTransform", "text-transform";
    TextUnderlineOffset => "textUnderlineOffset", "text-underline-offset";
    TextUnderlinePosition => "textUnderlinePosition", "text-underline-position";
    TextWrap => "textWrap", "text-wrap";
    Top => "top", "top";
    TouchAction => "touchAction", "touch-action";
    Transform => "transform", "transform";
    TransformOrigin => "transformOrigin", "transform-origin";
    TransformStyle => "transformStyle", "transform-style";
    Transition => "transition", "transition";
    TransitionDelay => "transitionDelay", "transition-delay";
    TransitionDuration => "transitionDuration", "transition-duration";
    TransitionProperty => "transitionProperty", "transition-property";
    TransitionTimingFunction => "transitionTimingFunction", "transition-timing-function";
    Translate => "translate", "translate";
    UnicodeBidi => "unicodeBidi", "unicode-bidi";
    UserSelect => "userSelect", "user-select";
    VerticalAlign => "verticalAlign", "vertical-align";
    ViewTransitionName => "viewTransitionName", "view-transition-name";
    Visibility => "visibility", "visibility";
    WhiteSpace => "whiteSpace", "white-space";
    Widows => "widows", "widows";
    Width => "width", "width";
    WillChange => "willChange", "will-change";
    WordBreak => "wordBreak", "word-break";
    WordSpacing => "wordSpacing", "word-spacing";
    WritingMode => "writingMode", "writing-mode";
    ZIndex => "zIndex", "z-index";
    Zoom => "zoom", "zoom";
    WebkitAppearance => "WebkitAppearance", "-webkit-appearance";
    WebkitBackdropFilter => "WebkitBackdropFilter", "-webkit-backdrop-filter";
    WebkitFontSmoothing => "WebkitFontSmoothing", "-webkit-font-smoothing";
    WebkitLineClamp => "WebkitLineClamp", "-webkit-line-clamp";
    WebkitTapHighlightColor => "WebkitTapHighlightColor", "-webkit-tap-highlight-color";
    WebkitTextFillColor => "WebkitTextFillColor", "-webkit-text-fill-color";
    MozOsxFontSmoothing => "MozOsxFontSmoothing", "-moz-osx-font-smoothing";
}

static BY_NAME: Lazy<HashMap<&'static str, Property>> = Lazy::new(|| {
    let mut names = HashMap::with_capacity(Property::ALL.len() * 2);
    for &property in Property::ALL {
        names.insert(property.as_str(), property);
        names.insert(property.css_name(), property);
    }
    names
});

impl Property {
    /// Looks up a property by its camelCase or hyphenated name.
    pub fn from_name(name: &str) -> Option<Property> {
        BY_NAME.get(name).copied()
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_name())
    }
}

impl FromStr for Property {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Property::from_name(s).ok_or_else(|| SchemaError::UnknownProperty(s.to_string()))
    }
}

impl Serialize for Property {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Property {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(D::Error::custom)
    }
}
