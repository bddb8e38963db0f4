use crate::color::RGB;

/// The CSS named colors, sorted by name.
pub const CSS_COLORS: &[(&str, RGB)] = &[
    ("aliceblue", RGB { r: 240, g: 248, b: 255 }),
    ("antiquewhite", RGB { r: 250, g: 235, b: 215 }),
    ("aqua", RGB { r: 0, g: 255, b: 255 }),
    ("aquamarine", RGB { r: 127, g: 255, b: 212 }),
    ("azure", RGB { r: 240, g: 255, b: 255 }),
    ("beige", RGB { r: 245, g: 245, b: 220 }),
    ("bisque", RGB { r: 255, g: 228, b: 196 }),
    ("black", RGB { r: 0, g: 0, b: 0 }),
    ("blanchedalmond", RGB { r: 255, g: 235, b: 205 }),
    ("blue", RGB { r: 0, g: 0, b: 255 }),
    ("blueviolet", RGB { r: 138, g: 43, b: 226 }),
    ("brown", RGB { r: 165, g: 42, b: 42 }),
    ("burlywood", RGB { r: 222, g: 184, b: 135 }),
    ("cadetblue", RGB { r: 95, g: 158, b: 160 }),
    ("chartreuse", RGB { r: 127, g: 255, b: 0 }),
    ("chocolate", RGB { r: 210, g: 105, b: 30 }),
    ("coral", RGB { r: 255, g: 127, b: 80 }),
    ("cornflowerblue", RGB { r: 100, g: 149, b: 237 }),
    ("cornsilk", RGB { r: 255, g: 248, b: 220 }),
    ("crimson", RGB { r: 220, g: 20, b: 60 }),
    ("cyan", RGB { r: 0, g: 255, b: 255 }),
    ("darkblue", RGB { r: 0, g: 0, b: 139 }),
    ("darkcyan", RGB { r: 0, g: 139, b: 139 }),
    ("darkgoldenrod", RGB { r: 184, g: 134, b: 11 }),
    ("darkgray", RGB { r: 169, g: 169, b: 169 }),
    ("darkgreen", RGB { r: 0, g: 100, b: 0 }),
    ("darkgrey", RGB { r: 169, g: 169, b: 169 }),
    ("darkkhaki", RGB { r: 189, g: 183, b: 107 }),
    ("darkmagenta", RGB { r: 139, g: 0, b: 139 }),
    ("darkolivegreen", RGB { r: 85, g: 107, b: 47 }),
    ("darkorange", RGB { r: 255, g: 140, b: 0 }),
    ("darkorchid", RGB { r: 153, g: 50, b: 204 }),
    ("darkred", RGB { r: 139, g: 0, b: 0 }),
    ("darksalmon", RGB { r: 233, g: 150, b: 122 }),
    ("darkseagreen", RGB { r: 143, g: 188, b: 143 }),
    ("darkslateblue", RGB { r: 72, g: 61, b: 139 }),
    ("darkslategray", RGB { r: 47, g: 79, b: 79 }),
    ("darkslategrey", RGB { r: 47, g: 79, b: 79 }),
    ("darkturquoise", RGB { r: 0, g: 206, b: 209 }),
    ("darkviolet", RGB { r: 148, g: 0, b: 211 }),
    ("deeppink", RGB { r: 255, g: 20, b: 147 }),
    ("deepskyblue", RGB { r: 0, g: 191, b: 255 }),
    ("dimgray", RGB { r: 105, g: 105, b: 105 }),
    ("dimgrey", RGB { r: 105, g: 105, b: 105 }),
    ("dodgerblue", RGB { r: 30, g: 144, b: 255 }),
    ("firebrick", RGB { r: 178, g: 34, b: 34 }),
    ("floralwhite", RGB { r: 255, g: 250, b: 240 }),
    ("forestgreen", RGB { r: 34, g: 139, b: 34 }),
    ("fuchsia", RGB { r: 255, g: 0, b: 255 }),
    ("gainsboro", RGB { r: 220, g: 220, b: 220 }),
    ("ghostwhite", RGB { r: 248, g: 248, b: 255 }),
    ("gold", RGB { r: 255, g: 215, b: 0 }),
    ("goldenrod", RGB { r: 218, g: 165, b: 32 }),
    ("gray", RGB { r: 128, g: 128, b: 128 }),
    ("green", RGB { r: 0, g: 128, b: 0 }),
    ("greenyellow", RGB { r: 173, g: 255, b: 47 }),
    ("grey", RGB { r: 128, g: 128, b: 128 }),
    ("honeydew", RGB { r: 240, g: 255, b: 240 }),
    ("hotpink", RGB { r: 255, g: 105, b: 180 }),
    ("indianred", RGB { r: 205, g: 92, b: 92 }),
    ("indigo", RGB { r: 75, g: 0, b: 130 }),
    ("ivory", RGB { r: 255, g: 255, b: 240 }),
    ("khaki", RGB { r: 240, g: 230, b: 140 }),
    ("lavender", RGB { r: 230, g: 230, b: 250 }),
    ("lavenderblush", RGB { r: 255, g: 240, b: 245 }),
    ("lawngreen", RGB { r: 124, g: 252, b: 0 }),
    ("lemonchiffon", RGB { r: 255, g: 250, b: 205 }),
    ("lightblue", RGB { r: 173, g: 216, b: 230 }),
    ("lightcoral", RGB { r: 240, g: 128, b: 128 }),
    ("lightcyan", RGB { r: 224, g: 255, b: 255 }),
    ("lightgoldenrodyellow", RGB { r: 250, g: 250, b: 210 }),
    ("lightgray", RGB { r: 211, g: 211, b: 211 }),
    ("lightgreen", RGB { r: 144, g: 238, b: 144 }),
    ("lightgrey", RGB { r: 211, g: 211, b: 211 }),
    ("lightpink", RGB { r: 255, g: 182, b: 193 }),
    ("lightsalmon", RGB { r: 255, g: 160, b: 122 }),
    ("lightseagreen", RGB { r: 32, g: 178, b: 170 }),
    ("lightskyblue", RGB { r: 135, g: 206, b: 250 }),
    ("lightslategray", RGB { r: 119, g: 136, b: 153 }),
    ("lightslategrey", RGB { r: 119, g: 136, b: 153 }),
    ("lightsteelblue", RGB { r: 176, g: 196, b: 222 }),
    ("lightyellow", RGB { r: 255, g: 255, b: 224 }),
    ("lime", RGB { r: 0, g: 255, b: 0 }),
    ("limegreen", RGB { r: 50, g: 205, b: 50 }),
    ("linen", RGB { r: 250, g: 240, b: 230 }),
    ("magenta", RGB { r: 255, g: 0, b: 255 }),
    ("maroon", RGB { r: 128, g: 0, b: 0 }),
    ("mediumaquamarine", RGB { r: 102, g: 205, b: 170 }),
    ("mediumblue", RGB { r: 0, g: 0, b: 205 }),
    ("mediumorchid", RGB { r: 186, g: 85, b: 211 }),
    ("mediumpurple", RGB { r: 147, g: 112, b: 219 }),
    ("mediumseagreen", RGB { r: 60, g: 179, b: 113 }),
    ("mediumslateblue", RGB { r: 123, g: 104, b: 238 }),
    ("mediumspringgreen", RGB { r: 0, g: 250, b: 154 }),
    ("mediumturquoise", RGB { r: 72, g: 209, b: 204 }),
    ("mediumvioletred", RGB { r: 199, g: 21, b: 133 }),
    ("midnightblue", RGB { r: 25, g: 25, b: 112 }),
    ("mintcream", RGB { r: 245, g: 255, b: 250 }),
    ("mistyrose", RGB { r: 255, g: 228, b: 225 }),
    ("moccasin", RGB { r: 255, g: 228, b: 181 }),
    ("navajowhite", RGB { r: 255, g: 222, b: 173 }),
    ("navy", RGB { r: 0, g: 0, b: 128 }),
    ("oldlace", RGB { r: 253, g: 245, b: 230 }),
    ("olive", RGB { r: 128, g: 128, b: 0 }),
    ("olivedrab", RGB { r: 107, g: 142, b: 35 }),
    ("orange", RGB { r: 255, g: 165, b: 0 }),
    ("orangered", RGB { r: 255, g: 69, b: 0 }),
    ("orchid", RGB { r: 218, g: 112, b: 214 }),
    ("palegoldenrod", RGB { r: 238, g: 232, b: 170 }),
    ("palegreen", RGB { r: 152, g: 251, b: 152 }),
    ("paleturquoise", RGB { r: 175, g: 238, b: 238 }),
    ("palevioletred", RGB { r: 219, g: 112, b: 147 }),
    ("papayawhip", RGB { r: 255, g: 239, b: 213 }),
    ("peachpuff", RGB { r: 255, g: 218, b: 185 }),
    ("peru", RGB { r: 205, g: 133, b: 63 }),
    ("pink", RGB { r: 255, g: 192, b: 203 }),
    ("plum", RGB { r: 221, g: 160, b: 221 }),
    ("powderblue", RGB { r: 176, g: 224, b: 230 }),
    ("purple", RGB { r: 128, g: 0, b: 128 }),
    ("rebeccapurple", RGB { r: 102, g: 51, b: 153 }),
    ("red", RGB { r: 255, g: 0, b: 0 }),
    ("rosybrown", RGB { r: 188, g: 143, b: 143 }),
    ("royalblue", RGB { r: 65, g: 105, b: 225 }),
    ("saddlebrown", RGB { r: 139, g: 69, b: 19 }),
    ("salmon", RGB { r: 250, g: 128, b: 114 }),
    ("sandybrown", RGB { r: 244, g: 164, b: 96 }),
    ("seagreen", RGB { r: 46, g: 139, b: 87 }),
    ("seashell", RGB { r: 255, g: 245, b: 238 }),
    ("sienna", RGB { r: 160, g: 82, b: 45 }),
    ("silver", RGB { r: 192, g: 192, b: 192 }),
    ("skyblue", RGB { r: 135, g: 206, b: 235 }),
    ("slateblue", RGB { r: 106, g: 90, b: 205 }),
    ("slategray", RGB { r: 112, g: 128, b: 144 }),
    ("slategrey", RGB { r: 112, g: 128, b: 144 }),
    ("snow", RGB { r: 255, g: 250, b: 250 }),
    ("springgreen", RGB { r: 0, g: 255, b: 127 }),
    ("steelblue", RGB { r: 70, g: 130, b: 180 }),
    ("tan", RGB { r: 210, g: 180, b: 140 }),
    ("teal", RGB { r: 0, g: 128, b: 128 }),
    ("thistle", RGB { r: 216, g: 191, b: 216 }),
    ("tomato", RGB { r: 255, g: 99, b: 71 }),
    ("turquoise", RGB { r: 64, g: 224, b: 208 }),
    ("violet", RGB { r: 238, g: 130, b: 238 }),
    ("wheat", RGB { r: 245, g: 222, b: 179 }),
    ("white", RGB { r: 255, g: 255, b: 255 }),
    ("whitesmoke", RGB { r: 245, g: 245, b: 245 }),
    ("yellow", RGB { r: 255, g: 255, b: 0 }),
    ("yellowgreen", RGB { r: 154, g: 205, b: 50 }),
];

/// Look up a CSS named color. Names are lowercase.
pub fn lookup(name: &str) -> Option<RGB> {
    CSS_COLORS
        .binary_search_by(|(n, _)| (*n).cmp(name))
        .ok()
        .map(|i| CSS_COLORS[i].1)
}

/// Whether `name` is one of the CSS named colors.
pub fn is_css_color(name: &str) -> bool {
    lookup(name).is_some()
}
