//! Built-in word tables.

/// Hebrew letters, each with words that start with it: (word with nikud, emoji).
#[rustfmt::skip]
pub const HEBREW_WORDS: &[(&str, &[(&str, &str)])] = &[
    ("א", &[("אַבְטִיחַ", "🍉"), ("אַרְיֵה", "🦁"), ("אוֹטוֹ", "🚗"), ("אֲנָנָס", "🍍"), ("אַרְנָב", "🐰"), ("אִיגְלוּ", "🛖"), ("אֲבָב", "🥑")]),
    ("ב", &[("בַּיִת", "🏠"), ("בָּנָנָה", "🍌"), ("בָּלוֹן", "🎈"), ("בַּרְוָז", "🦆"), ("בֻּבָּה", "🎎"), ("בֵּיצָה", "🥚"), ("בַּרְבּוּר", "🦢")]),
    ("ג", &[("גָּמָל", "🐫"), ("גְּלִידָה", "🍦"), ("גֶּזֶר", "🥕"), ("גִּיטָרָה", "🎸"), ("גְּבִינָה", "🧀"), ("גִּירָפָה", "🦒"), ("גַּלְגַּל", "🛞")]),
    ("ד", &[("דֶּלֶת", "🚪"), ("דָּג", "🐟"), ("דֻּבִּי", "🧸"), ("דְּלִי", "🪣"), ("דֶּגֶל", "🇮🇱"), ("דּוֹלְפִין", "🐬"), ("דְּבוֹרָה", "🐝")]),
    ("ה", &[("הַר", "⛰️"), ("הִיפּוֹפּוֹטָם", "🦛"), ("הֶלִיקוֹפְּטֶר", "🚁"), ("הַמְבּוּרְגֶּר", "🍔"), ("הַר גַּעַשׁ", "🌋")]),
    ("ו", &[("וֶרֶד", "🌹"), ("וִילּוֹן", "🪟"), ("וֵסְט", "🦺"), ("וָפֶל", "🧇"), ("וִירוּס", "🦠")]),
    ("ז", &[("זַיִת", "🫒"), ("זֶבְּרָה", "🦓"), ("זְבוּב", "🪰"), ("זָהָב", "🥇"), ("זַחַל", "🐛"), ("זֵר", "💐")]),
    ("ח", &[("חָתוּל", "🐈"), ("חֲמוֹר", "🫏"), ("חָלָב", "🥛"), ("חַלּוֹן", "🪟"), ("חֲזִיר", "🐖"), ("חֻלְצָה", "👕"), ("חַיְזָר", "👽")]),
    ("ט", &[("טֶלֶוִיזְיָה", "📺"), ("טֶלֶפוֹן", "☎️"), ("טַבַּעַת", "💍"), ("טַיָּס", "🧑‍✈️"), ("טַוָּס", "🦚"), ("טְרַקְטוֹר", "🚜")]),
    ("י", &[("יָרֵחַ", "🌙"), ("יֶלֶד", "👦"), ("יָד", "🖐️"), ("יַנְשׁוּף", "🦉"), ("יַהֲלוֹם", "💎"), ("יַתּוּשׁ", "🦟")]),
    ("כ", &[("כַּדּוּר", "⚽"), ("כֶּלֶב", "🐕"), ("כּוֹבַע", "👒"), ("כִּסֵּא", "🪑"), ("כּוֹכָב", "⭐"), ("כֶּתֶר", "👑"), ("כְּבִישׁ", "🛣️")]),
    ("ל", &[("לִימוֹן", "🍋"), ("לֵב", "💖"), ("לֶחֶם", "🍞"), ("לִוְיָתָן", "🐋"), ("לְטָאָה", "🦎"), ("לָמָה", "🦙")]),
    ("מ", &[("מֶלֶךְ", "👑"), ("מַתָּנָה", "🎁"), ("מְעִיל", "🧥"), ("מַסְרֵק", "🪮"), ("מְכוֹנִית", "🚗"), ("מַפְתֵּחַ", "🔑"), ("מִטָּה", "🛏️"), ("מַנְגוֹ", "🥭")]),
    ("נ", &[("נֵר", "🕯️"), ("נַעַל", "👞"), ("נָחָשׁ", "🐍"), ("נְמָלָה", "🐜"), ("נָמֵר", "🐆"), ("נְשִׁיקָה", "💋")]),
    ("ס", &[("סוּס", "🐴"), ("סֵפֶר", "📖"), ("סִירָה", "⛵"), ("סֻלָּם", "🪜"), ("סַבּוֹן", "🧼"), ("סֻכָּרִיָּה", "🍬")]),
    ("ע", &[("עַיִן", "👁️"), ("עֵץ", "🌳"), ("עוּגָה", "🎂"), ("עִפָּרוֹן", "✏️"), ("עַכְבָּר", "🐭"), ("עֲגָבְנִיָּה", "🍅"), ("עַקְרָב", "🦂")]),
    ("פ", &[("פָּרָה", "🐄"), ("פֶּרַח", "🌸"), ("פִּיל", "🐘"), ("פַּרְפַּר", "🦋"), ("פִּיצָה", "🍕"), ("פַּטִּישׁ", "🔨"), ("פַּנָּס", "🔦")]),
    ("צ", &[("צָב", "🐢"), ("צִפּוֹר", "🐦"), ("צְפַרְדֵּעַ", "🐸"), ("צַלַּחַת", "🍽️"), ("צֶבַע", "🎨"), ("צִיּוּר", "🖼️")]),
    ("ק", &[("קוֹף", "🐒"), ("קֻבִּיָּה", "🎲"), ("קַקְטוּס", "🌵"), ("קִפּוֹד", "🦔"), ("קִיוִוי", "🥝"), ("קַסְדָּה", "⛑️")]),
    ("ר", &[("רֹאשׁ", "🗣️"), ("רַכֶּבֶת", "🚆"), ("רִימּוֹן", "🍎"), ("רַמְזוֹר", "🚦"), ("רוֹבּוֹט", "🤖"), ("רֶגֶל", "🦶")]),
    ("ש", &[("שֶׁמֶשׁ", "☀️"), ("שָׁעוֹן", "⌚"), ("שֻׁלְחָן", "🛋️"), ("שַׁבְּלוּל", "🐌"), ("שׁוֹקוֹלָד", "🍫"), ("שִׁנַּיִם", "🦷"), ("שׁוּעָל", "🦊")]),
    ("ת", &[("תַּפּוּז", "🍊"), ("תּוּת", "🍓"), ("תִּינוֹק", "👶"), ("תַּרְנְגוֹל", "🐓"), ("תַּפּוּחַ", "🍎"), ("תִּיק", "🎒")]),
];

/// English words grouped by topic: (word, emoji).
#[rustfmt::skip]
pub const ENGLISH_WORDS: &[(&str, &[(&str, &str)])] = &[
    ("animals", &[
        ("CAT", "🐱"), ("DOG", "🐶"), ("FISH", "🐟"), ("BIRD", "🐦"), ("LION", "🦁"), ("TIGER", "🐯"),
        ("MONKEY", "🐒"), ("MOUSE", "🐭"), ("ZEBRA", "🦓"), ("COW", "🐄"), ("PIG", "🐖"), ("RABBIT", "🐰"),
        ("BEAR", "🐻"), ("ELEPHANT", "🐘"), ("GIRAFFE", "🦒"), ("HORSE", "🐎"), ("SHEEP", "🐑"), ("CHICKEN", "🐔"),
        ("FROG", "🐸"), ("TURTLE", "🐢"), ("DUCK", "🦆"), ("BUTTERFLY", "🦋"), ("BEE", "🐝"),
    ]),
    ("food", &[
        ("APPLE", "🍎"), ("BANANA", "🍌"), ("ORANGE", "🍊"), ("GRAPES", "🍇"), ("WATERMELON", "🍉"), ("STRAWBERRY", "🍓"),
        ("PIZZA", "🍕"), ("BURGER", "🍔"), ("FRIES", "🍟"), ("HOTDOG", "🌭"), ("EGG", "🥚"), ("BREAD", "🍞"),
        ("CAKE", "🎂"), ("ICE CREAM", "🍦"), ("COOKIE", "🍪"), ("CHOCOLATE", "🍫"), ("CANDY", "🍬"), ("MILK", "🥛"),
    ]),
    ("nature", &[
        ("SUN", "☀️"), ("MOON", "🌙"), ("STAR", "⭐"), ("FLOWER", "🌸"), ("TREE", "🌳"), ("CACTUS", "🌵"),
        ("RAINBOW", "🌈"), ("FIRE", "🔥"), ("WATER", "💧"),
    ]),
    ("objects", &[
        ("BALL", "⚽"), ("BOOK", "📖"), ("PENCIL", "✏️"), ("CRAYON", "🖍️"), ("SCISSORS", "✂️"), ("BALLOON", "🎈"),
        ("GIFT", "🎁"), ("CAR", "🚗"), ("BUS", "🚌"), ("TRAIN", "🚆"), ("PLANE", "✈️"), ("BOAT", "⛵"),
        ("BIKE", "🚲"), ("DOOR", "🚪"), ("BED", "🛏️"), ("CHAIR", "🪑"), ("TABLE", "🛋️"), ("TV", "📺"),
        ("PHONE", "📱"), ("WATCH", "⌚"), ("KEY", "🔑"),
    ]),
    ("clothes", &[
        ("HAT", "👒"), ("SHOE", "👞"), ("SHIRT", "👕"), ("PANTS", "👖"), ("DRESS", "👗"), ("SOCKS", "🧦"),
        ("GLASSES", "👓"), ("CROWN", "👑"),
    ]),
];

/// English colour names with their swatch.
pub const ENGLISH_COLORS: &[(&str, &str)] = &[
    ("RED", "#ef4444"),
    ("BLUE", "#3b82f6"),
    ("GREEN", "#22c55e"),
    ("YELLOW", "#facc15"),
    ("PINK", "#f472b6"),
    ("ORANGE", "#f97316"),
    ("PURPLE", "#9333ea"),
    ("BLACK", "#000000"),
    ("WHITE", "#ffffff"),
];

/// Objects drawn in counting illustrations.
pub const COUNTING_GLYPHS: &[&str] = &[
    "🧊", "🍎", "🍌", "🚗", "🤖", "🎈", "🦆", "⚽", "🍬", "🍦", "🦴", "🐈", "🐶", "🍕", "🚀",
];
