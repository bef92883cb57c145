/// Visa-issuing post city → country, keyed by the spellings the wait-times
/// page has used. Alternate forms (historical names, accented variants,
/// hyphenation) get their own entries so exact lookup can match whatever the
/// page currently prints.
pub static CITY_COUNTRY_PAIRS: &[(&str, &str)] = &[
    ("Abidjan", "Cote d'Ivoire"),
    ("Abu Dhabi", "United Arab Emirates"),
    ("Abuja", "Nigeria"),
    ("Accra", "Ghana"),
    ("Adana", "Turkey"),
    ("Addis Ababa", "Ethiopia"),
    ("Algiers", "Algeria"),
    ("Almaty", "Kazakhstan"),
    ("Amman", "Jordan"),
    ("Amsterdam", "Netherlands"),
    ("Ankara", "Turkey"),
    ("Antananarivo", "Madagascar"),
    ("Apia", "Samoa"),
    ("Ashgabat", "Turkmenistan"),
    ("Asmara", "Eritrea"),
    ("Astana", "Kazakhstan"),
    ("Asuncion", "Paraguay"),
    ("Asunción", "Paraguay"),
    ("Athens", "Greece"),
    ("Auckland", "New Zealand"),
    ("Baghdad", "Iraq"),
    ("Baku", "Azerbaijan"),
    ("Bamako", "Mali"),
    ("Bandar Seri Begawan", "Brunei"),
    ("Bangkok", "Thailand"),
    ("Bangui", "Central African Republic"),
    ("Banjul", "The Gambia"),
    ("Beijing", "China"),
    ("Beirut", "Lebanon"),
    ("Belfast", "United Kingdom"),
    ("Belgrade", "Serbia"),
    ("Belmopan", "Belize"),
    ("Berlin", "Germany"),
    ("Bern", "Switzerland"),
    ("Bishkek", "Kyrgyzstan"),
    ("Bogota", "Colombia"),
    ("Bogotá", "Colombia"),
    ("Bombay", "India"),
    ("Brasilia", "Brazil"),
    ("Brasília", "Brazil"),
    ("Bratislava", "Slovakia"),
    ("Brazzaville", "Republic of the Congo"),
    ("Bridgetown", "Barbados"),
    ("Brussels", "Belgium"),
    ("Bucharest", "Romania"),
    ("Budapest", "Hungary"),
    ("Buenos Aires", "Argentina"),
    ("Bujumbura", "Burundi"),
    ("Cairo", "Egypt"),
    ("Calcutta", "India"),
    ("Calgary", "Canada"),
    ("Cape Town", "South Africa"),
    ("Caracas", "Venezuela"),
    ("Casablanca", "Morocco"),
    ("Chengdu", "China"),
    ("Chennai", "India"),
    ("Chiang Mai", "Thailand"),
    ("Chisinau", "Moldova"),
    ("Ciudad Juarez", "Mexico"),
    ("Colombo", "Sri Lanka"),
    ("Conakry", "Guinea"),
    ("Copenhagen", "Denmark"),
    ("Cotonou", "Benin"),
    ("Curacao", "Curacao"),
    ("Dakar", "Senegal"),
    ("Damascus", "Syria"),
    ("Dar Es Salaam", "Tanzania"),
    ("Dar es Salaam", "Tanzania"),
    ("Dhahran", "Saudi Arabia"),
    ("Dhaka", "Bangladesh"),
    ("Dili", "Timor-Leste"),
    ("Djibouti", "Djibouti"),
    ("Doha", "Qatar"),
    ("Dubai", "United Arab Emirates"),
    ("Dublin", "Ireland"),
    ("Durban", "South Africa"),
    ("Dushanbe", "Tajikistan"),
    ("Erbil", "Iraq"),
    ("Florence", "Italy"),
    ("Frankfurt", "Germany"),
    ("Frankfurt am Main", "Germany"),
    ("Freetown", "Sierra Leone"),
    ("Fukuoka", "Japan"),
    ("Gaborone", "Botswana"),
    ("Georgetown", "Guyana"),
    ("Guadalajara", "Mexico"),
    ("Guangzhou", "China"),
    ("Guatemala City", "Guatemala"),
    ("Guayaquil", "Ecuador"),
    ("Halifax", "Canada"),
    ("Hamilton", "Bermuda"),
    ("Hanoi", "Vietnam"),
    ("Harare", "Zimbabwe"),
    ("Havana", "Cuba"),
    ("Helsinki", "Finland"),
    ("Hermosillo", "Mexico"),
    ("Ho Chi Minh City", "Vietnam"),
    ("Hong Kong", "Hong Kong"),
    ("Hyderabad", "India"),
    ("Islamabad", "Pakistan"),
    ("Istanbul", "Turkey"),
    ("Jakarta", "Indonesia"),
    ("Jeddah", "Saudi Arabia"),
    ("Jerusalem", "Israel"),
    ("Johannesburg", "South Africa"),
    ("Juba", "South Sudan"),
    ("Kabul", "Afghanistan"),
    ("Kampala", "Uganda"),
    ("Karachi", "Pakistan"),
    ("Kathmandu", "Nepal"),
    ("Khartoum", "Sudan"),
    ("Kiev", "Ukraine"),
    ("Kigali", "Rwanda"),
    ("Kingston", "Jamaica"),
    ("Kinshasa", "Democratic Republic of the Congo"),
    ("Kolkata", "India"),
    ("Kolonia", "Micronesia"),
    ("Koror", "Palau"),
    ("Krakow", "Poland"),
    ("Kuala Lumpur", "Malaysia"),
    ("Kuwait", "Kuwait"),
    ("Kuwait City", "Kuwait"),
    ("Kyiv", "Ukraine"),
    ("La Paz", "Bolivia"),
    ("Lagos", "Nigeria"),
    ("Lahore", "Pakistan"),
    ("Libreville", "Gabon"),
    ("Lilongwe", "Malawi"),
    ("Lima", "Peru"),
    ("Lisbon", "Portugal"),
    ("Ljubljana", "Slovenia"),
    ("Lome", "Togo"),
    ("Lomé", "Togo"),
    ("London", "United Kingdom"),
    ("Luanda", "Angola"),
    ("Lusaka", "Zambia"),
    ("Luxembourg", "Luxembourg"),
    ("Madras", "India"),
    ("Madrid", "Spain"),
    ("Majuro", "Marshall Islands"),
    ("Malabo", "Equatorial Guinea"),
    ("Managua", "Nicaragua"),
    ("Manama", "Bahrain"),
    ("Manila", "Philippines"),
    ("Maputo", "Mozambique"),
    ("Maseru", "Lesotho"),
    ("Matamoros", "Mexico"),
    ("Mbabane", "Eswatini"),
    ("Melbourne", "Australia"),
    ("Merida", "Mexico"),
    ("Mérida", "Mexico"),
    ("Mexico City", "Mexico"),
    ("Milan", "Italy"),
    ("Minsk", "Belarus"),
    ("Mogadishu", "Somalia"),
    ("Monrovia", "Liberia"),
    ("Monterrey", "Mexico"),
    ("Montevideo", "Uruguay"),
    ("Montreal", "Canada"),
    ("Moscow", "Russia"),
    ("Mumbai", "India"),
    ("Munich", "Germany"),
    ("Muscat", "Oman"),
    ("N'Djamena", "Chad"),
    ("Ndjamena", "Chad"),
    ("Naha", "Japan"),
    ("Nairobi", "Kenya"),
    ("Naples", "Italy"),
    ("Nassau", "The Bahamas"),
    ("New Delhi", "India"),
    ("Niamey", "Niger"),
    ("Nicosia", "Cyprus"),
    ("Nogales", "Mexico"),
    ("Nouakchott", "Mauritania"),
    ("Nuevo Laredo", "Mexico"),
    ("Nur Sultan", "Kazakhstan"),
    ("Nur-Sultan", "Kazakhstan"),
    ("Osaka", "Japan"),
    ("Oslo", "Norway"),
    ("Ottawa", "Canada"),
    ("Ouagadougou", "Burkina Faso"),
    ("Panama City", "Panama"),
    ("Paramaribo", "Suriname"),
    ("Paris", "France"),
    ("Perth", "Australia"),
    ("Phnom Penh", "Cambodia"),
    ("Podgorica", "Montenegro"),
    ("Ponta Delgada", "Portugal"),
    ("Port Au Prince", "Haiti"),
    ("Port Louis", "Mauritius"),
    ("Port Moresby", "Papua New Guinea"),
    ("Port au Prince", "Haiti"),
    ("Port of Spain", "Trinidad and Tobago"),
    ("Port-au-Prince", "Haiti"),
    ("Porto Alegre", "Brazil"),
    ("Prague", "Czech Republic"),
    ("Praia", "Cabo Verde"),
    ("Pristina", "Kosovo"),
    ("Quebec", "Canada"),
    ("Quebec City", "Canada"),
    ("Quito", "Ecuador"),
    ("Rangoon", "Burma"),
    ("Recife", "Brazil"),
    ("Reykjavik", "Iceland"),
    ("Riga", "Latvia"),
    ("Rio De Janeiro", "Brazil"),
    ("Rio de Janeiro", "Brazil"),
    ("Riyadh", "Saudi Arabia"),
    ("Rome", "Italy"),
    ("Saigon", "Vietnam"),
    ("San Jose", "Costa Rica"),
    ("San José", "Costa Rica"),
    ("San Salvador", "El Salvador"),
    ("Sanaa", "Yemen"),
    ("Santiago", "Chile"),
    ("Santo Domingo", "Dominican Republic"),
    ("Sao Paulo", "Brazil"),
    ("São Paulo", "Brazil"),
    ("Sapporo", "Japan"),
    ("Sarajevo", "Bosnia and Herzegovina"),
    ("Seoul", "South Korea"),
    ("Shanghai", "China"),
    ("Shenyang", "China"),
    ("Singapore", "Singapore"),
    ("Skopje", "North Macedonia"),
    ("Sofia", "Bulgaria"),
    ("St Petersburg", "Russia"),
    ("St. Petersburg", "Russia"),
    ("Stockholm", "Sweden"),
    ("Surabaya", "Indonesia"),
    ("Suva", "Fiji"),
    ("Sydney", "Australia"),
    ("Taipei", "Taiwan"),
    ("Tallinn", "Estonia"),
    ("Tashkent", "Uzbekistan"),
    ("Tbilisi", "Georgia"),
    ("Tegucigalpa", "Honduras"),
    ("Tel Aviv", "Israel"),
    ("Tijuana", "Mexico"),
    ("Tirana", "Albania"),
    ("Tokyo", "Japan"),
    ("Toronto", "Canada"),
    ("Tripoli", "Libya"),
    ("Tunis", "Tunisia"),
    ("Ulaanbaatar", "Mongolia"),
    ("Ulan Bator", "Mongolia"),
    ("Valletta", "Malta"),
    ("Vancouver", "Canada"),
    ("Vienna", "Austria"),
    ("Vientiane", "Laos"),
    ("Vilnius", "Lithuania"),
    ("Vladivostok", "Russia"),
    ("Warsaw", "Poland"),
    ("Windhoek", "Namibia"),
    ("Wuhan", "China"),
    ("Yangon", "Burma"),
    ("Yaounde", "Cameroon"),
    ("Yaoundé", "Cameroon"),
    ("Yekaterinburg", "Russia"),
    ("Yerevan", "Armenia"),
    ("Zagreb", "Croatia"),
];
