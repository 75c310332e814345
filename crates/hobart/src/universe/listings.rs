//! Built-in index membership, grouped by sector.
//!
//! Every listing belongs to the S&P 500; the flags mark S&P 100 (`OEX`) and
//! Dow Jones Industrial Average (`DJI`) membership as well.

use super::gics::GicsSector;

pub(crate) const SPX: u8 = 0;
pub(crate) const OEX: u8 = 1;
pub(crate) const DJI: u8 = 1 << 1;

pub(crate) type Listing = (&'static str, &'static str, u8);

pub(crate) const LISTINGS: &[(GicsSector, &[Listing])] = &[
    (GicsSector::InformationTechnology, INFORMATION_TECHNOLOGY),
    (GicsSector::HealthCare, HEALTH_CARE),
    (GicsSector::Financials, FINANCIALS),
    (GicsSector::ConsumerDiscretionary, CONSUMER_DISCRETIONARY),
    (GicsSector::CommunicationServices, COMMUNICATION_SERVICES),
    (GicsSector::Industrials, INDUSTRIALS),
    (GicsSector::ConsumerStaples, CONSUMER_STAPLES),
    (GicsSector::Energy, ENERGY),
    (GicsSector::Utilities, UTILITIES),
    (GicsSector::RealEstate, REAL_ESTATE),
    (GicsSector::Materials, MATERIALS),
];

const INFORMATION_TECHNOLOGY: &[Listing] = &[
    ("AAPL", "Apple Inc.", OEX | DJI),
    ("ACN", "Accenture", OEX),
    ("ADBE", "Adobe Inc.", OEX),
    ("ADI", "Analog Devices", SPX),
    ("ADSK", "Autodesk", SPX),
    ("AKAM", "Akamai Technologies", SPX),
    ("AMAT", "Applied Materials", SPX),
    ("AMD", "Advanced Micro Devices", OEX),
    ("ANET", "Arista Networks", SPX),
    ("ANSS", "Ansys", SPX),
    ("APH", "Amphenol", SPX),
    ("AVGO", "Broadcom", OEX),
    ("CDNS", "Cadence Design Systems", SPX),
    ("CDW", "CDW Corporation", SPX),
    ("CRM", "Salesforce", OEX | DJI),
    ("CRWD", "CrowdStrike", SPX),
    ("CSCO", "Cisco Systems", OEX | DJI),
    ("CTSH", "Cognizant", SPX),
    ("ENPH", "Enphase Energy", SPX),
    ("EPAM", "EPAM Systems", SPX),
    ("FFIV", "F5, Inc.", SPX),
    ("FICO", "Fair Isaac", SPX),
    ("FSLR", "First Solar", SPX),
    ("FTNT", "Fortinet", SPX),
    ("GDDY", "GoDaddy", SPX),
    ("GEN", "Gen Digital", SPX),
    ("GLW", "Corning Inc.", SPX),
    ("HPE", "Hewlett Packard Enterprise", SPX),
    ("HPQ", "HP Inc.", SPX),
    ("IBM", "IBM", OEX | DJI),
    ("INTC", "Intel", OEX),
    ("INTU", "Intuit", OEX),
    ("IT", "Gartner", SPX),
    ("JBL", "Jabil", SPX),
    ("JNPR", "Juniper Networks", SPX),
    ("KEYS", "Keysight Technologies", SPX),
    ("KLAC", "KLA Corporation", SPX),
    ("LRCX", "Lam Research", SPX),
    ("MCHP", "Microchip Technology", SPX),
    ("MPWR", "Monolithic Power Systems", SPX),
    ("MSFT", "Microsoft", OEX | DJI),
    ("MSI", "Motorola Solutions", SPX),
    ("MU", "Micron Technology", SPX),
    ("NOW", "ServiceNow", SPX),
    ("NTAP", "NetApp", SPX),
    ("NVDA", "Nvidia", OEX | DJI),
    ("NXPI", "NXP Semiconductors", SPX),
    ("ON", "ON Semiconductor", SPX),
    ("ORCL", "Oracle Corporation", OEX),
    ("PANW", "Palo Alto Networks", SPX),
    ("PLTR", "Palantir Technologies", SPX),
    ("PTC", "PTC Inc.", SPX),
    ("QCOM", "Qualcomm", OEX),
    ("QRVO", "Qorvo", SPX),
    ("ROP", "Roper Technologies", SPX),
    ("SMCI", "Supermicro", SPX),
    ("SNPS", "Synopsys", SPX),
    ("STX", "Seagate Technology", SPX),
    ("SWKS", "Skyworks Solutions", SPX),
    ("TDY", "Teledyne Technologies", SPX),
    ("TEL", "TE Connectivity", SPX),
    ("TER", "Teradyne", SPX),
    ("TRMB", "Trimble Inc.", SPX),
    ("TXN", "Texas Instruments", OEX),
    ("TYL", "Tyler Technologies", SPX),
    ("VRSN", "Verisign", SPX),
    ("WDC", "Western Digital", SPX),
    ("ZBRA", "Zebra Technologies", SPX),
];

const HEALTH_CARE: &[Listing] = &[
    ("A", "Agilent Technologies", SPX),
    ("ABBV", "AbbVie", OEX),
    ("ABT", "Abbott Laboratories", OEX),
    ("ALGN", "Align Technology", SPX),
    ("AMGN", "Amgen", OEX | DJI),
    ("BAX", "Baxter International", SPX),
    ("BDX", "Becton Dickinson", SPX),
    ("BIIB", "Biogen", SPX),
    ("BMY", "Bristol Myers Squibb", OEX),
    ("BSX", "Boston Scientific", SPX),
    ("CAH", "Cardinal Health", SPX),
    ("CI", "Cigna Group", SPX),
    ("CNC", "Centene Corporation", SPX),
    ("COO", "Cooper Companies", SPX),
    ("COR", "Cencora", SPX),
    ("CRL", "Charles River Laboratories", SPX),
    ("CTLT", "Catalent", SPX),
    ("CVS", "CVS Health", OEX),
    ("DGX", "Quest Diagnostics", SPX),
    ("DHR", "Danaher Corporation", OEX),
    ("DVA", "DaVita", SPX),
    ("DXCM", "Dexcom", SPX),
    ("ELV", "Elevance Health", SPX),
    ("EW", "Edwards Lifesciences", SPX),
    ("GEHC", "GE HealthCare", SPX),
    ("GILD", "Gilead Sciences", OEX),
    ("HCA", "HCA Healthcare", SPX),
    ("HOLX", "Hologic", SPX),
    ("HSIC", "Henry Schein", SPX),
    ("HUM", "Humana", SPX),
    ("IDXX", "Idexx Laboratories", SPX),
    ("INCY", "Incyte", SPX),
    ("IQV", "IQVIA", SPX),
    ("ISRG", "Intuitive Surgical", SPX),
    ("JNJ", "Johnson & Johnson", OEX | DJI),
    ("LH", "Labcorp", SPX),
    ("LLY", "Eli Lilly and Company", OEX),
    ("MCK", "McKesson Corporation", SPX),
    ("MDT", "Medtronic", OEX),
    ("MOH", "Molina Healthcare", SPX),
    ("MRK", "Merck & Co.", OEX | DJI),
    ("MRNA", "Moderna", SPX),
    ("MTD", "Mettler Toledo", SPX),
    ("PFE", "Pfizer", OEX),
    ("PODD", "Insulet Corporation", SPX),
    ("REGN", "Regeneron Pharmaceuticals", SPX),
    ("RMD", "ResMed", SPX),
    ("RVTY", "Revvity", SPX),
    ("SOLV", "Solventum", SPX),
    ("STE", "Steris", SPX),
    ("SYK", "Stryker Corporation", SPX),
    ("TECH", "Bio-Techne", SPX),
    ("TFX", "Teleflex", SPX),
    ("TMO", "Thermo Fisher Scientific", OEX),
    ("UHS", "Universal Health Services", SPX),
    ("UNH", "UnitedHealth Group", OEX | DJI),
    ("VRTX", "Vertex Pharmaceuticals", SPX),
    ("VTRS", "Viatris", SPX),
    ("WAT", "Waters Corporation", SPX),
    ("WST", "West Pharmaceutical Services", SPX),
    ("ZBH", "Zimmer Biomet", SPX),
    ("ZTS", "Zoetis", SPX),
];

const FINANCIALS: &[Listing] = &[
    ("ACGL", "Arch Capital Group", SPX),
    ("AFL", "Aflac", SPX),
    ("AIG", "American International Group", OEX),
    ("AIZ", "Assurant", SPX),
    ("AJG", "Arthur J. Gallagher & Co.", SPX),
    ("ALL", "Allstate", SPX),
    ("AMP", "Ameriprise Financial", SPX),
    ("AON", "Aon", SPX),
    ("AXP", "American Express", OEX | DJI),
    ("BAC", "Bank of America", OEX),
    ("BEN", "Franklin Resources", SPX),
    ("BK", "BNY Mellon", OEX),
    ("BLK", "BlackRock", OEX),
    ("BRK.B", "Berkshire Hathaway", OEX),
    ("BRO", "Brown & Brown", SPX),
    ("BX", "Blackstone Inc.", SPX),
    ("C", "Citigroup", OEX),
    ("CB", "Chubb Limited", SPX),
    ("CBOE", "Cboe Global Markets", SPX),
    ("CFG", "Citizens Financial Group", SPX),
    ("CINF", "Cincinnati Financial", SPX),
    ("CME", "CME Group", SPX),
    ("COF", "Capital One", OEX),
    ("CPAY", "Corpay", SPX),
    ("DFS", "Discover Financial", SPX),
    ("EG", "Everest Group", SPX),
    ("ERIE", "Erie Indemnity", SPX),
    ("FDS", "FactSet", SPX),
    ("FI", "Fiserv", SPX),
    ("FIS", "Fidelity National Information Services", SPX),
    ("FITB", "Fifth Third Bancorp", SPX),
    ("GL", "Globe Life", SPX),
    ("GPN", "Global Payments", SPX),
    ("GS", "Goldman Sachs", OEX | DJI),
    ("HBAN", "Huntington Bancshares", SPX),
    ("HIG", "The Hartford", SPX),
    ("ICE", "Intercontinental Exchange", SPX),
    ("IVZ", "Invesco", SPX),
    ("JKHY", "Jack Henry & Associates", SPX),
    ("JPM", "JPMorgan Chase", OEX | DJI),
    ("KEY", "KeyCorp", SPX),
    ("KKR", "KKR & Co.", SPX),
    ("L", "Loews Corporation", SPX),
    ("MA", "Mastercard", OEX),
    ("MCO", "Moody's Corporation", SPX),
    ("MET", "MetLife", OEX),
    ("MKTX", "MarketAxess", SPX),
    ("MMC", "Marsh McLennan", SPX),
    ("MS", "Morgan Stanley", OEX),
    ("MSCI", "MSCI Inc.", SPX),
    ("MTB", "M&T Bank", SPX),
    ("NDAQ", "Nasdaq, Inc.", SPX),
    ("NTRS", "Northern Trust", SPX),
    ("PFG", "Principal Financial Group", SPX),
    ("PGR", "Progressive Corporation", SPX),
    ("PNC", "PNC Financial Services", SPX),
    ("PRU", "Prudential Financial", SPX),
    ("PYPL", "PayPal", OEX),
    ("RF", "Regions Financial", SPX),
    ("RJF", "Raymond James Financial", SPX),
    ("SCHW", "Charles Schwab Corporation", OEX),
    ("SPGI", "S&P Global", SPX),
    ("STT", "State Street Corporation", SPX),
    ("SYF", "Synchrony Financial", SPX),
    ("TFC", "Truist Financial", SPX),
    ("TROW", "T. Rowe Price", SPX),
    ("TRV", "Travelers Companies", DJI),
    ("USB", "U.S. Bancorp", OEX),
    ("V", "Visa Inc.", OEX | DJI),
    ("WFC", "Wells Fargo", OEX),
    ("WRB", "W. R. Berkley Corporation", SPX),
    ("WTW", "Willis Towers Watson", SPX),
];

const CONSUMER_DISCRETIONARY: &[Listing] = &[
    ("ABNB", "Airbnb", SPX),
    ("AMZN", "Amazon", OEX | DJI),
    ("APTV", "Aptiv", SPX),
    ("AZO", "AutoZone", SPX),
    ("BBY", "Best Buy", SPX),
    ("BKNG", "Booking Holdings", OEX),
    ("BWA", "BorgWarner", SPX),
    ("CCL", "Carnival Corporation", SPX),
    ("CMG", "Chipotle Mexican Grill", SPX),
    ("CZR", "Caesars Entertainment", SPX),
    ("DECK", "Deckers Brands", SPX),
    ("DHI", "D. R. Horton", SPX),
    ("DPZ", "Domino's", SPX),
    ("DRI", "Darden Restaurants", SPX),
    ("EBAY", "eBay", SPX),
    ("EXPE", "Expedia Group", SPX),
    ("F", "Ford Motor Company", OEX),
    ("GM", "General Motors", OEX),
    ("GPC", "Genuine Parts Company", SPX),
    ("GRMN", "Garmin", SPX),
    ("HAS", "Hasbro", SPX),
    ("HD", "Home Depot", OEX | DJI),
    ("HLT", "Hilton Worldwide", SPX),
    ("KMX", "CarMax", SPX),
    ("LEN", "Lennar", SPX),
    ("LKQ", "LKQ Corporation", SPX),
    ("LOW", "Lowe's", OEX),
    ("LULU", "Lululemon Athletica", SPX),
    ("LVS", "Las Vegas Sands", SPX),
    ("MAR", "Marriott International", SPX),
    ("MCD", "McDonald's", OEX | DJI),
    ("MGM", "MGM Resorts", SPX),
    ("MHK", "Mohawk Industries", SPX),
    ("NCLH", "Norwegian Cruise Line Holdings", SPX),
    ("NKE", "Nike, Inc.", OEX | DJI),
    ("NVR", "NVR, Inc.", SPX),
    ("ORLY", "O'Reilly Automotive", SPX),
    ("PHM", "PulteGroup", SPX),
    ("POOL", "Pool Corporation", SPX),
    ("RCL", "Royal Caribbean Group", SPX),
    ("RL", "Ralph Lauren Corporation", SPX),
    ("ROST", "Ross Stores", SPX),
    ("SBUX", "Starbucks", OEX),
    ("TJX", "TJX Companies", SPX),
    ("TPR", "Tapestry, Inc.", SPX),
    ("TSCO", "Tractor Supply", SPX),
    ("TSLA", "Tesla, Inc.", OEX),
    ("ULTA", "Ulta Beauty", SPX),
    ("WYNN", "Wynn Resorts", SPX),
    ("YUM", "Yum! Brands", SPX),
];

const COMMUNICATION_SERVICES: &[Listing] = &[
    ("CHTR", "Charter Communications", OEX),
    ("CMCSA", "Comcast", OEX),
    ("DIS", "Walt Disney Company", OEX | DJI),
    ("EA", "Electronic Arts", SPX),
    ("FOX", "Fox Corporation (Class B)", SPX),
    ("FOXA", "Fox Corporation (Class A)", SPX),
    ("GOOG", "Alphabet Inc. (Class C)", OEX),
    ("GOOGL", "Alphabet Inc. (Class A)", OEX),
    ("IPG", "Interpublic Group", SPX),
    ("LYV", "Live Nation Entertainment", SPX),
    ("META", "Meta Platforms", OEX),
    ("MTCH", "Match Group", SPX),
    ("NFLX", "Netflix", OEX),
    ("NWS", "News Corp (Class B)", SPX),
    ("NWSA", "News Corp (Class A)", SPX),
    ("OMC", "Omnicom Group", SPX),
    ("PARA", "Paramount Global", SPX),
    ("T", "AT&T", OEX),
    ("TMUS", "T-Mobile US", OEX),
    ("TTWO", "Take-Two Interactive", SPX),
    ("VZ", "Verizon", OEX | DJI),
    ("WBD", "Warner Bros. Discovery", SPX),
];

const INDUSTRIALS: &[Listing] = &[
    ("ADP", "Automatic Data Processing", SPX),
    ("ALLE", "Allegion", SPX),
    ("AME", "Ametek", SPX),
    ("AOS", "A. O. Smith", SPX),
    ("AXON", "Axon Enterprise", SPX),
    ("BA", "Boeing", OEX | DJI),
    ("BLDR", "Builders FirstSource", SPX),
    ("BR", "Broadridge Financial Solutions", SPX),
    ("CARR", "Carrier Global", SPX),
    ("CAT", "Caterpillar Inc.", OEX | DJI),
    ("CHRW", "C.H. Robinson", SPX),
    ("CMI", "Cummins", SPX),
    ("CPRT", "Copart", SPX),
    ("CSX", "CSX Corporation", SPX),
    ("CTAS", "Cintas", SPX),
    ("DAL", "Delta Air Lines", SPX),
    ("DAY", "Dayforce", SPX),
    ("DE", "Deere & Company", OEX),
    ("DOV", "Dover Corporation", SPX),
    ("EFX", "Equifax", SPX),
    ("EMR", "Emerson Electric", OEX),
    ("ETN", "Eaton Corporation", SPX),
    ("EXPD", "Expeditors International", SPX),
    ("FAST", "Fastenal", SPX),
    ("FDX", "FedEx", OEX),
    ("FTV", "Fortive", SPX),
    ("GD", "General Dynamics", OEX),
    ("GE", "GE Aerospace", OEX),
    ("GEV", "GE Vernova", SPX),
    ("GNRC", "Generac", SPX),
    ("GWW", "W. W. Grainger", SPX),
    ("HII", "Huntington Ingalls Industries", SPX),
    ("HON", "Honeywell", OEX | DJI),
    ("HUBB", "Hubbell Incorporated", SPX),
    ("HWM", "Howmet Aerospace", SPX),
    ("IEX", "IDEX Corporation", SPX),
    ("IR", "Ingersoll Rand", SPX),
    ("ITW", "Illinois Tool Works", SPX),
    ("J", "Jacobs Solutions", SPX),
    ("JBHT", "J.B. Hunt", SPX),
    ("JCI", "Johnson Controls", SPX),
    ("LDOS", "Leidos", SPX),
    ("LHX", "L3Harris", SPX),
    ("LII", "Lennox International", SPX),
    ("LMT", "Lockheed Martin", OEX),
    ("LUV", "Southwest Airlines", SPX),
    ("MAS", "Masco", SPX),
    ("MMM", "3M", OEX | DJI),
    ("NDSN", "Nordson Corporation", SPX),
    ("NOC", "Northrop Grumman", SPX),
    ("NSC", "Norfolk Southern", SPX),
    ("ODFL", "Old Dominion", SPX),
    ("OTIS", "Otis Worldwide", SPX),
    ("PAYC", "Paycom", SPX),
    ("PAYX", "Paychex", SPX),
    ("PCAR", "Paccar", SPX),
    ("PH", "Parker Hannifin", SPX),
    ("PNR", "Pentair", SPX),
    ("PWR", "Quanta Services", SPX),
    ("ROK", "Rockwell Automation", SPX),
    ("ROL", "Rollins, Inc.", SPX),
    ("RSG", "Republic Services", SPX),
    ("RTX", "RTX Corporation", OEX),
    ("SNA", "Snap-on", SPX),
    ("SWK", "Stanley Black & Decker", SPX),
    ("TDG", "TransDigm Group", SPX),
    ("TT", "Trane Technologies", SPX),
    ("TXT", "Textron", SPX),
    ("UAL", "United Airlines Holdings", SPX),
    ("UBER", "Uber", SPX),
    ("UNP", "Union Pacific Corporation", OEX),
    ("UPS", "United Parcel Service", OEX),
    ("URI", "United Rentals", SPX),
    ("VLTO", "Veralto", SPX),
    ("VRSK", "Verisk Analytics", SPX),
    ("WAB", "Wabtec", SPX),
    ("WM", "Waste Management", SPX),
    ("XYL", "Xylem Inc.", SPX),
];

const CONSUMER_STAPLES: &[Listing] = &[
    ("ADM", "Archer Daniels Midland", SPX),
    ("BG", "Bunge Global", SPX),
    ("CAG", "Conagra Brands", SPX),
    ("CHD", "Church & Dwight", SPX),
    ("CL", "Colgate-Palmolive", OEX),
    ("CLX", "Clorox", SPX),
    ("COST", "Costco", OEX),
    ("CPB", "Campbell Soup Company", SPX),
    ("DG", "Dollar General", SPX),
    ("DLTR", "Dollar Tree", SPX),
    ("EL", "Estee Lauder Companies", SPX),
    ("GIS", "General Mills", SPX),
    ("HRL", "Hormel Foods", SPX),
    ("HSY", "Hershey Company", SPX),
    ("K", "Kellanova", SPX),
    ("KDP", "Keurig Dr Pepper", SPX),
    ("KHC", "Kraft Heinz", OEX),
    ("KMB", "Kimberly-Clark", SPX),
    ("KO", "Coca-Cola Company", OEX | DJI),
    ("KR", "Kroger", SPX),
    ("KVUE", "Kenvue", SPX),
    ("LW", "Lamb Weston", SPX),
    ("MDLZ", "Mondelez International", OEX),
    ("MKC", "McCormick & Company", SPX),
    ("MNST", "Monster Beverage", SPX),
    ("MO", "Altria", OEX),
    ("PEP", "PepsiCo", OEX),
    ("PG", "Procter & Gamble", OEX | DJI),
    ("PM", "Philip Morris International", OEX),
    ("SJM", "J.M. Smucker Company", SPX),
    ("STZ", "Constellation Brands", SPX),
    ("SYY", "Sysco", SPX),
    ("TAP", "Molson Coors Beverage Company", SPX),
    ("TGT", "Target Corporation", OEX),
    ("TSN", "Tyson Foods", SPX),
    ("WBA", "Walgreens Boots Alliance", SPX),
    ("WMT", "Walmart", OEX | DJI),
];

const ENERGY: &[Listing] = &[
    ("APA", "APA Corporation", SPX),
    ("BKR", "Baker Hughes", SPX),
    ("COP", "ConocoPhillips", OEX),
    ("CTRA", "Coterra", SPX),
    ("CVX", "Chevron Corporation", OEX | DJI),
    ("DVN", "Devon Energy", SPX),
    ("EOG", "EOG Resources", SPX),
    ("EQT", "EQT Corporation", SPX),
    ("FANG", "Diamondback Energy", SPX),
    ("HAL", "Halliburton", SPX),
    ("HES", "Hess Corporation", SPX),
    ("KMI", "Kinder Morgan", SPX),
    ("MPC", "Marathon Petroleum", SPX),
    ("MRO", "Marathon Oil", SPX),
    ("OKE", "Oneok", SPX),
    ("OXY", "Occidental Petroleum", SPX),
    ("PSX", "Phillips 66", SPX),
    ("SLB", "Schlumberger", SPX),
    ("TRGP", "Targa Resources", SPX),
    ("VLO", "Valero Energy", SPX),
    ("WMB", "Williams Companies", SPX),
    ("XOM", "ExxonMobil", OEX),
];

const UTILITIES: &[Listing] = &[
    ("AEE", "Ameren", SPX),
    ("AEP", "American Electric Power", SPX),
    ("AES", "AES Corporation", SPX),
    ("ATO", "Atmos Energy", SPX),
    ("AWK", "American Water Works", SPX),
    ("CEG", "Constellation Energy", SPX),
    ("CMS", "CMS Energy", SPX),
    ("CNP", "CenterPoint Energy", SPX),
    ("D", "Dominion Energy", SPX),
    ("DTE", "DTE Energy", SPX),
    ("DUK", "Duke Energy", OEX),
    ("ED", "Consolidated Edison", SPX),
    ("EIX", "Edison International", SPX),
    ("ES", "Eversource Energy", SPX),
    ("ETR", "Entergy", SPX),
    ("EVRG", "Evergy", SPX),
    ("EXC", "Exelon", SPX),
    ("FE", "FirstEnergy", SPX),
    ("LNT", "Alliant Energy", SPX),
    ("NEE", "NextEra Energy", OEX),
    ("NI", "NiSource", SPX),
    ("NRG", "NRG Energy", SPX),
    ("PCG", "PG&E Corporation", SPX),
    ("PEG", "Public Service Enterprise Group", SPX),
    ("PNW", "Pinnacle West Capital", SPX),
    ("PPL", "PPL Corporation", SPX),
    ("SO", "Southern Company", OEX),
    ("SRE", "Sempra", SPX),
    ("VST", "Vistra Corp.", SPX),
    ("WEC", "WEC Energy Group", SPX),
    ("XEL", "Xcel Energy", SPX),
];

const REAL_ESTATE: &[Listing] = &[
    ("AMT", "American Tower", OEX),
    ("ARE", "Alexandria Real Estate Equities", SPX),
    ("AVB", "AvalonBay Communities", SPX),
    ("BXP", "BXP, Inc.", SPX),
    ("CBRE", "CBRE Group", SPX),
    ("CCI", "Crown Castle", SPX),
    ("CPT", "Camden Property Trust", SPX),
    ("CSGP", "CoStar Group", SPX),
    ("DLR", "Digital Realty", SPX),
    ("DOC", "Healthpeak Properties", SPX),
    ("EQIX", "Equinix", SPX),
    ("EQR", "Equity Residential", SPX),
    ("ESS", "Essex Property Trust", SPX),
    ("EXR", "Extra Space Storage", SPX),
    ("FRT", "Federal Realty Investment Trust", SPX),
    ("HST", "Host Hotels & Resorts", SPX),
    ("INVH", "Invitation Homes", SPX),
    ("IRM", "Iron Mountain", SPX),
    ("KIM", "Kimco Realty", SPX),
    ("MAA", "Mid-America Apartment Communities", SPX),
    ("O", "Realty Income", SPX),
    ("PLD", "Prologis", SPX),
    ("PSA", "Public Storage", SPX),
    ("REG", "Regency Centers", SPX),
    ("SBAC", "SBA Communications", SPX),
    ("SPG", "Simon Property Group", OEX),
    ("UDR", "UDR, Inc.", SPX),
    ("VICI", "Vici Properties", SPX),
    ("VTR", "Ventas", SPX),
    ("WELL", "Welltower", SPX),
    ("WY", "Weyerhaeuser", SPX),
];

const MATERIALS: &[Listing] = &[
    ("ALB", "Albemarle Corporation", SPX),
    ("AMCR", "Amcor", SPX),
    ("APD", "Air Products", SPX),
    ("AVY", "Avery Dennison", SPX),
    ("BALL", "Ball Corporation", SPX),
    ("CE", "Celanese", SPX),
    ("CF", "CF Industries", SPX),
    ("CTVA", "Corteva", SPX),
    ("DD", "DuPont", SPX),
    ("DOW", "Dow Inc.", OEX),
    ("ECL", "Ecolab", SPX),
    ("EMN", "Eastman Chemical Company", SPX),
    ("FCX", "Freeport-McMoRan", SPX),
    ("IFF", "International Flavors & Fragrances", SPX),
    ("IP", "International Paper", SPX),
    ("LIN", "Linde plc", OEX),
    ("LYB", "LyondellBasell", SPX),
    ("MLM", "Martin Marietta Materials", SPX),
    ("MOS", "Mosaic Company", SPX),
    ("NEM", "Newmont", SPX),
    ("NUE", "Nucor", SPX),
    ("PKG", "Packaging Corporation of America", SPX),
    ("PPG", "PPG Industries", SPX),
    ("SHW", "Sherwin-Williams", DJI),
    ("STLD", "Steel Dynamics", SPX),
    ("SW", "Smurfit Westrock", SPX),
    ("VMC", "Vulcan Materials Company", SPX),
];
