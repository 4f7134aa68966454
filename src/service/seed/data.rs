//! Standard knowledge base contents.
//!
//! Brand names are canonical display names. Synonyms are stored lowercased and exclude the
//! brand's own name, which already resolves as an alias.

pub static BRANDS: &[&str] = &[
    "Audi", "Avatr", "BAIC", "BMW", "Brilliance", "Buick", "BYD", "Cadillac", "Changan",
    "Chery", "Chevrolet", "Citroen", "Datsun", "Denza", "Dongfeng", "Exeed", "FAW", "Ford",
    "Forthing", "Foton", "GAC", "Geely", "Great Wall", "Haima", "Haval", "HiPhi", "Honda",
    "Hongqi", "Huawei", "Hyundai", "Infiniti", "JAC", "Jaecoo", "Jaguar", "Jeep", "Jetour",
    "Jetta", "Jishi", "Kia", "Land Rover", "Leamotor", "Lexus", "Lifan", "Lincoln", "LiXiang",
    "Lotus", "Lynk & Co", "Mazda", "Mercedes-Benz", "MG", "Mini", "Mitsubishi", "Neta", "NIO",
    "Nissan", "Omoda", "Peugeot", "Polestar", "Porsche", "Ravon", "Saipa", "Skoda", "Smart",
    "Tank", "Tesla", "Toyota", "Venucia", "Volkswagen", "Volvo", "Voyah", "Wuling", "Xiaomi",
    "Xpeng", "Zeekr", "Zotye",
];

pub static BRAND_SYNONYMS: &[(&str, &[&str])] = &[
    ("Audi", &["ауди"]),
    ("Avatr", &["аватр"]),
    ("BAIC", &["баик", "beijing auto"]),
    ("BMW", &["бмв", "bayerische motoren werke"]),
    ("Brilliance", &["бриллианс"]),
    ("Buick", &["бьюик"]),
    ("BYD", &["бид", "build your dream"]),
    ("Cadillac", &["кадиллак"]),
    ("Changan", &["чанган"]),
    ("Chery", &["чери"]),
    ("Chevrolet", &["шевроле", "chevy"]),
    ("Citroen", &["ситроен"]),
    ("Datsun", &["датсун", "датсан"]),
    ("Denza", &["денза"]),
    ("Dongfeng", &["донгфенг", "dfm"]),
    ("Exeed", &["эксид"]),
    ("FAW", &["фав", "first automobile works"]),
    ("Ford", &["форд"]),
    ("Forthing", &["фортинг"]),
    ("Foton", &["фотон"]),
    ("GAC", &["гак", "guangzhou automobile group"]),
    ("Geely", &["джили"]),
    (
        "Great Wall",
        &["great-wall", "greatwall", "грейт вол", "грейт-вол", "грейтвол"],
    ),
    ("Haima", &["хайма"]),
    ("Haval", &["хавейл"]),
    ("HiPhi", &["хайфай", "хай-фай"]),
    ("Honda", &["хонда"]),
    ("Hongqi", &["хонгки", "red flag"]),
    ("Huawei", &["хуавей"]),
    ("Hyundai", &["хендай", "хёндэ"]),
    ("Infiniti", &["инфинити"]),
    ("Jaguar", &["ягуар"]),
    ("Jetour", &["джетур"]),
    ("Jetta", &["джетта"]),
    ("Jishi", &["джиши"]),
    ("Kia", &["киа"]),
    (
        "Land Rover",
        &["landrover", "ленд ровер", "ленд-ровер", "лендровер"],
    ),
    ("Leamotor", &["лимото"]),
    ("Lexus", &["лексус"]),
    ("Lifan", &["лифан"]),
    ("Lincoln", &["линкольн"]),
    ("LiXiang", &["li auto", "лисян", "ли сян"]),
    ("Lotus", &["лотус"]),
    ("Lynk & Co", &["lynkco", "линк энд ко"]),
    ("Mazda", &["мазда"]),
    ("Mercedes-Benz", &["mb", "мерседес", "мерс"]),
    ("MG", &["эмджи", "morris garages"]),
    ("Mini", &["мини"]),
    ("Mitsubishi", &["митсубиси", "мицубиси"]),
    ("Neta", &["нета"]),
    ("NIO", &["нио"]),
    ("Nissan", &["ниссан"]),
    ("Peugeot", &["пежо"]),
    ("Polestar", &["полстар"]),
    ("Porsche", &["порше"]),
    ("Ravon", &["равон"]),
    ("Saipa", &["саипа"]),
    ("Skoda", &["шкода"]),
    ("Smart", &["смарт"]),
    ("Tank", &["танк"]),
    ("Tesla", &["тесла"]),
    ("Toyota", &["тойота"]),
    ("Venucia", &["венуча"]),
    ("Volkswagen", &["vw", "фольксваген"]),
    ("Volvo", &["вольво"]),
    ("Voyah", &["воях"]),
    ("Wuling", &["улин"]),
    ("Xiaomi", &["сяоми"]),
    ("Xpeng", &["спен"]),
    ("Zeekr", &["зикр"]),
    ("Zotye", &["зоти"]),
];

pub static BRAND_MODELS: &[(&str, &[&str])] = &[
    (
        "Audi",
        &[
            "A3", "A4", "A5", "A6", "A7", "A8", "Q3", "Q5", "Q7", "Q8", "e-tron", "RS3", "RS5",
            "RS6",
        ],
    ),
    ("Avatr", &["11", "12"]),
    ("BAIC", &["BJ40", "BJ80", "EU5", "EX5"]),
    (
        "BMW",
        &[
            "1 Series", "2 Series", "3 Series", "4 Series", "5 Series", "7 Series", "X1", "X3",
            "X5", "X6", "i4", "iX",
        ],
    ),
    ("Buick", &["Encore", "Envision", "Enclave", "Regal", "LaCrosse"]),
    ("BYD", &["Tang", "Song", "Han", "Dolphin", "Seal", "Atto 3"]),
    ("Cadillac", &["CT4", "CT5", "XT4", "XT5", "XT6", "Escalade"]),
    ("Changan", &["CS35", "CS55", "CS75", "CS75 Plus", "UNI-T", "UNI-K"]),
    (
        "Chery",
        &["Tiggo 4", "Tiggo 7", "Tiggo 8", "Tiggo 8 Pro", "Arrizo 5", "Arrizo 8"],
    ),
    (
        "Chevrolet",
        &["Spark", "Malibu", "Trax", "Trailblazer", "Equinox", "Tahoe", "Silverado"],
    ),
    ("Citroen", &["C3", "C4", "C5", "C5 Aircross", "Berlingo"]),
    ("Denza", &["D9", "N7"]),
    ("Dongfeng", &["Aeolus AX7", "Joyear X5", "Fengshen E70"]),
    ("Exeed", &["TXL", "VX", "LX"]),
    ("FAW", &["Bestune T77", "Bestune T99"]),
    (
        "Ford",
        &["Focus", "Kuga", "Escape", "Edge", "Explorer", "F-150", "Mustang"],
    ),
    ("Forthing", &["T5 Evo", "S500"]),
    ("GAC", &["GS4", "GS8", "Aion S", "Aion V"]),
    ("Geely", &["Coolray", "Atlas", "Monjaro", "Tugella", "Emgrand"]),
    ("Great Wall", &["Poer", "Tank 300", "Tank 500"]),
    ("Haval", &["Jolion", "H6", "F7", "F7x", "Dargo"]),
    ("HiPhi", &["X", "Z", "Y"]),
    ("Honda", &["Civic", "Accord", "CR-V", "HR-V", "Pilot"]),
    ("Hongqi", &["H5", "H7", "HS5", "HS7", "E-HS9"]),
    ("Huawei", &["Aito M5", "Aito M7"]),
    (
        "Hyundai",
        &["i20", "i30", "Elantra", "Sonata", "Tucson", "Santa Fe", "Palisade", "Kona"],
    ),
    ("Infiniti", &["Q50", "Q60", "QX50", "QX60", "QX80"]),
    ("JAC", &["JS4", "JS6", "S4", "S7", "iEV7S", "E10X"]),
    ("Jaecoo", &["J7"]),
    ("Jaguar", &["XE", "XF", "F-Pace", "E-Pace", "I-Pace"]),
    (
        "Jeep",
        &[
            "Renegade", "Compass", "Cherokee", "Grand Cherokee", "Wrangler", "Gladiator",
            "Wagoneer",
        ],
    ),
    ("Jetour", &["X70", "X90"]),
    ("Jetta", &["VS5", "VS7", "VA3"]),
    ("Jishi", &["01"]),
    (
        "Kia",
        &["Rio", "Ceed", "Cerato", "K5", "Sportage", "Sorento", "Stinger", "EV6", "Seltos"],
    ),
    (
        "Land Rover",
        &["Defender", "Discovery", "Range Rover", "Range Rover Sport", "Evoque"],
    ),
    ("Leamotor", &["S01", "C01"]),
    ("Lexus", &["UX", "NX", "RX", "GX", "LX", "IS", "ES", "LS"]),
    ("Lincoln", &["Corsair", "Nautilus", "Aviator", "Navigator"]),
    ("LiXiang", &["L7", "L8", "L9"]),
    ("Lotus", &["Eletre", "Emira"]),
    ("Lynk & Co", &["01", "02", "03", "05", "06", "09"]),
    ("Mazda", &["Mazda3", "Mazda6", "CX-30", "CX-5", "CX-9"]),
    (
        "Mercedes-Benz",
        &[
            "A-Class", "C-Class", "E-Class", "S-Class", "GLA", "GLC", "GLE", "GLS", "EQC", "EQS",
        ],
    ),
    ("MG", &["ZS", "HS", "5 EV", "MG4", "MG5", "MG6"]),
    ("Mini", &["Cooper", "Countryman", "Clubman", "Electric"]),
    (
        "Mitsubishi",
        &["ASX", "Outlander", "Pajero Sport", "Eclipse Cross"],
    ),
    ("Neta", &["V", "U", "S", "GT"]),
    ("NIO", &["ES6", "ES7", "ES8", "EC6", "ET5", "ET7"]),
    (
        "Nissan",
        &["Juke", "Qashqai", "X-Trail", "Murano", "Pathfinder", "Leaf", "GT-R"],
    ),
    ("Omoda", &["C5", "S5"]),
    ("Peugeot", &["208", "2008", "308", "3008", "408", "508"]),
    ("Polestar", &["2", "3"]),
    ("Porsche", &["911", "718", "Cayenne", "Macan", "Taycan", "Panamera"]),
    (
        "Skoda",
        &["Fabia", "Octavia", "Superb", "Karoq", "Kodiaq", "Enyaq"],
    ),
    ("Smart", &["ForTwo", "ForFour", "#1", "#3"]),
    ("Tank", &["300", "500"]),
    (
        "Tesla",
        &["Model 3", "Model Y", "Model S", "Model X", "Cybertruck"],
    ),
    (
        "Toyota",
        &[
            "Corolla", "Camry", "RAV4", "Highlander", "Land Cruiser", "Yaris", "C-HR", "Hilux",
        ],
    ),
    ("Venucia", &["D60", "T60", "Star"]),
    (
        "Volkswagen",
        &["Polo", "Golf", "Tiguan", "Touareg", "Passat", "Arteon", "ID.3", "ID.4"],
    ),
    (
        "Volvo",
        &["XC40", "XC60", "XC90", "S60", "S90", "V60", "EX90"],
    ),
    ("Voyah", &["Free", "Dreamer"]),
    ("Wuling", &["Hongguang Mini EV", "Victory", "Asta"]),
    ("Xiaomi", &["SU7"]),
    ("Xpeng", &["G3", "P5", "P7", "G9"]),
    ("Zeekr", &["001", "X", "009"]),
];

pub static BRAND_TRIMS: &[(&str, &[&str])] = &[
    (
        "BMW",
        &[
            "Base", "Sport", "M Sport", "Luxury", "xLine", "M Performance", "Competition",
            "Individual", "Executive", "Pure Excellence", "M Sport Pro", "M Sport X",
            "First Edition",
        ],
    ),
    (
        "Mercedes-Benz",
        &[
            "Base", "AMG", "AMG Line", "Avantgarde", "Exclusive", "Premium", "Night Edition",
            "Edition 1",
        ],
    ),
    (
        "Audi",
        &[
            "Base", "Premium", "Premium Plus", "Prestige", "S Line", "Black Edition", "Sport",
            "RS", "Competition", "Design", "Technology", "Advanced", "Ultra",
        ],
    ),
    (
        "Volkswagen",
        &[
            "Base", "S", "SE", "SEL", "R-Line", "R", "GTI", "GTE", "GLI", "Life", "Style",
            "Executive",
        ],
    ),
    (
        "Porsche",
        &["Base", "S", "4S", "Turbo", "Turbo S", "GTS", "GT3", "Targa", "Exclusive", "RS"],
    ),
    (
        "Toyota",
        &[
            "L", "LE", "SE", "XLE", "XSE", "Limited", "Platinum", "TRD", "Adventure", "Hybrid",
            "Prestige Safety",
        ],
    ),
    (
        "Honda",
        &["LX", "EX", "Sport", "Touring", "Elite", "Type R", "Black Edition", "Hybrid"],
    ),
    (
        "Lexus",
        &["Base", "Premium", "Luxury", "F SPORT", "Ultra Luxury", "Executive", "Black Line"],
    ),
    (
        "Nissan",
        &["S", "SV", "SL", "SR", "Platinum", "NISMO", "Midnight Edition", "Rock Creek"],
    ),
    (
        "Hyundai",
        &["SE", "SEL", "Limited", "Ultimate", "N Line", "Sport", "Calligraphy", "Preferred"],
    ),
    (
        "Kia",
        &["LX", "EX", "GT-Line", "SX", "GT", "Sport", "Prestige", "Hybrid"],
    ),
    (
        "Ford",
        &["S", "SE", "SEL", "Titanium", "Limited", "ST", "Raptor", "Platinum"],
    ),
    (
        "Chevrolet",
        &["LS", "LT", "Premier", "High Country", "RS", "ZR2", "SS", "Trail Boss"],
    ),
    (
        "Jeep",
        &[
            "Sport", "Latitude", "Limited", "Trailhawk", "Summit", "Overland", "Rubicon",
            "Altitude",
        ],
    ),
    (
        "Tesla",
        &["Standard Range", "Long Range", "Performance", "Plaid", "Dual Motor"],
    ),
    (
        "Volvo",
        &["Momentum", "Inscription", "R-Design", "Cross Country", "Ultimate"],
    ),
    (
        "Land Rover",
        &["Base", "S", "SE", "HSE", "Autobiography", "First Edition", "Dynamic"],
    ),
    (
        "Jaguar",
        &["Base", "Prestige", "R-Sport", "SVR", "Checkered Flag", "First Edition"],
    ),
    (
        "Chery",
        &["Comfort", "Luxury", "Premium", "Elite", "Flagship", "Royal", "Supreme"],
    ),
    (
        "Geely",
        &["Comfort", "Luxury", "Premium", "Flagship", "Elite", "Sport"],
    ),
    (
        "Haval",
        &["Comfort", "Luxury", "Premium", "Ultra", "Top", "Red Label", "Blue Label"],
    ),
    (
        "Exeed",
        &["Comfort", "Luxury", "Premium", "Flagship", "Supreme", "Executive"],
    ),
    (
        "Changan",
        &["Comfort", "Luxury", "Premium", "Elite", "Supreme", "Flagship"],
    ),
    (
        "BYD",
        &["Comfort", "Luxury", "Premium", "Flagship", "Champion", "Plus", "Pro", "Ultimate"],
    ),
    (
        "Omoda",
        &["Comfort", "Luxury", "Premium", "Flagship", "Supreme"],
    ),
    (
        "Jaecoo",
        &["Comfort", "Luxury", "Premium", "Ultimate", "Elite", "Flagship"],
    ),
    (
        "Voyah",
        &["Long Range", "Executive", "Supreme"],
    ),
    (
        "Hongqi",
        &["Standard", "Deluxe", "Flagship", "Executive", "Royal", "Presidential"],
    ),
    (
        "FAW",
        &["Comfort", "Luxury", "Premium", "Flagship", "Elite"],
    ),
    (
        "NIO",
        &["Base", "Signature Edition", "Performance", "Premier Edition", "Standard", "Long Range"],
    ),
    (
        "JAC",
        &["Standard", "Comfort", "Luxury", "Elite", "Premium", "Flagship"],
    ),
];

pub static BRAND_MODIFICATIONS: &[(&str, &[&str])] = &[
    (
        "BMW",
        &[
            "xDrive20d", "xDrive20i", "xDrive30d", "xDrive30i", "xDrive40d", "xDrive40i",
            "xDrive50i", "M40i", "M50i", "sDrive20i", "sDrive30i", "118d", "118i", "120i",
            "220d", "320d", "320i", "330i", "330e", "420d", "520d", "530i", "M340i", "M550i",
        ],
    ),
    (
        "Mercedes-Benz",
        &[
            "C 180", "C 200", "C 220", "C 300", "E 200", "E 220", "E 300", "E 350", "E 450",
            "S 350", "S 450", "S 500", "S 580", "A 180", "A 200", "A 250", "GLA 200", "GLA 250",
            "GLA 45 AMG", "GLC 200", "GLC 300", "GLC 43 AMG", "GLC 63 AMG", "GLE 350",
            "GLE 450", "GLE 53 AMG", "GLE 63 AMG", "E 300 2.0T", "C 300 2.0T", "S 450 3.0T",
            "GLC 300 2.0T",
        ],
    ),
    (
        "Audi",
        &[
            "30 TDI", "35 TDI", "40 TDI", "45 TDI", "50 TDI", "30 TFSI", "35 TFSI", "40 TFSI",
            "45 TFSI", "55 TFSI", "45 TFSI quattro", "55 TFSI quattro", "40 TDI quattro",
            "50 TDI quattro", "1.4 TFSI", "2.0 TDI", "3.0 TDI",
        ],
    ),
    (
        "Volkswagen",
        &[
            "1.4 TSI", "1.5 TSI", "1.8 TSI", "2.0 TSI", "2.0 TDI", "2.0 TDI 4Motion",
            "2.0 TSI 4Motion",
        ],
    ),
    ("Porsche", &["Carrera", "Carrera S", "Carrera 4S", "Turbo S"]),
    ("Toyota", &["2.5L", "2.5 Hybrid", "Dynamic Force", "V8"]),
    ("Honda", &["1.5 i-VTEC", "2.0 i-VTEC", "Earth Dreams"]),
    (
        "Hyundai",
        &["2.0 MPI", "2.5 Smartstream", "1.6 T-GDI", "2.2 CRDi", "N Line"],
    ),
    ("Kia", &["2.0 MPI", "1.6 T-GDI", "2.5 Smartstream", "2.2 CRDi"]),
    ("Ford", &["1.5 EcoBoost", "2.0 EcoBoost", "2.3 EcoBoost", "3.0 EcoBoost"]),
    ("Tesla", &["Dual Motor", "Tri Motor"]),
    ("Chery", &["1.5T CVT", "1.6T DCT", "2.0T DCT"]),
    ("Geely", &["1.5T", "1.8T", "2.0T", "2.0TD", "2.0 TGDi"]),
    ("Haval", &["1.5T DCT", "2.0T DCT"]),
    ("Exeed", &["1.6 TGDI", "2.0 TGDI"]),
    ("Changan", &["1.5T", "2.0T"]),
    ("Tank", &["2.0T", "3.0T"]),
    ("BYD", &["EV", "PHEV", "DM-i"]),
    ("Omoda", &["1.5T", "1.6T DCT"]),
    ("Jaecoo", &["1.6T DCT"]),
    ("Voyah", &["EV", "EREV"]),
    ("Hongqi", &["2.0T", "3.0T"]),
    ("NIO", &["75 kWh", "100 kWh"]),
    ("JAC", &["1.5T", "2.0T", "iEV"]),
    ("FAW", &["1.5T", "2.0T"]),
];
