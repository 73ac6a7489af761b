/// Served when the host's country has no curated pool.
pub const FALLBACK_URL: &str = "https://bing.com";

/// Sites that are costly to block wholesale. Appended to every regional pool.
pub(super) const RESISTANT_URLS: &[&str] = &[
    "https://www.apple.com",
    "https://developer.apple.com",
    "https://raw.githubusercontent.com",
    "https://www.microsoft.com",
    "https://update.microsoft.com",
    "https://azure.microsoft.com",
    "https://aws.amazon.com",
    "https://s3.amazonaws.com",
    "https://d1.awsstatic.com",
    "https://scholar.google.com",
    "https://arxiv.org",
    "https://www.ieee.org",
    "https://www.springer.com",
    "https://www.debian.org",
    "https://download.oracle.com",
    "https://developer.nvidia.com",
];

pub(super) const SG_URLS: &[&str] = &[
    "https://www.nus.edu.sg",
    "https://www.ntu.edu.sg",
    "https://www.smu.edu.sg",
    "https://www.sutd.edu.sg",
    "https://www.singaporetech.edu.sg",
    "https://www.lasalle.edu.sg",
    "https://www.nafa.edu.sg",
    "https://www.sim.edu.sg",
    "https://www.dimensions.edu.sg",
    "https://www.kaplan.com.sg",
    "https://www.raffles-iao.com",
    "https://www.psb-academy.edu.sg",
    "https://www.singtel.com",
    "https://www.shrm.edu.sg",
    "https://www.lazada.sg",
    "https://shopee.sg",
    "https://www.hardwarezone.com.sg",
    "https://www.straitstimes.com",
    "https://www.channelnewsasia.com",
    "https://www.mom.gov.sg",
    "https://www.imda.gov.sg",
    "https://www.mas.gov.sg",
    "https://www.ica.gov.sg",
    "https://www.nparks.gov.sg",
    "https://www.nea.gov.sg",
    "https://www.changiairport.com",
    "https://www.businesstimes.com.sg",
    "https://www.todayonline.com",
    "https://www.starhub.com",
    "https://www.m1.com.sg",
    "https://www.sgx.com",
    "https://www.ura.gov.sg",
    "https://www.singpost.com",
    "https://www.mediacorp.sg",
    "https://www.lta.gov.sg",
    "https://www.pub.gov.sg",
    "https://www.smrt.com.sg",
];

pub(super) const US_URLS: &[&str] = &[
    "https://harvard.edu",
    "https://stanford.edu",
    "https://mit.edu",
    "https://caltech.edu",
    "https://uchicago.edu",
    "https://princeton.edu",
    "https://columbia.edu",
    "https://yale.edu",
    "https://upenn.edu",
    "https://duke.edu",
    "https://nyu.edu",
    "https://berkeley.edu",
    "https://cornell.edu",
    "https://northwestern.edu",
    "https://umich.edu",
    "https://cmu.edu",
    "https://usc.edu",
    "https://gatech.edu",
    "https://washington.edu",
    "https://ucla.edu",
    "https://www.imdb.com/",
    "https://www.zygotebody.com/",
    "https://javascript.info/",
    "https://www.tesla.com/",
    "https://clippingmagic.com/",
    "https://www.dell.com/en-us/gaming/",
    "https://us.louisvuitton.com/",
    "https://www.prada.com/us",
    "https://www.gucci.com/us",
    "https://www.porsche.com/usa/",
    "https://www.cartier.com/en-us",
    "https://www.dior.com/en_us",
    "https://www.rolex.com/en-us",
    "https://www.ncbi.nlm.nih.gov/pmc",
    "https://www.jstor.org",
    "https://muse.jhu.edu",
    "https://www.researchgate.net",
    "https://www.academia.edu",
    "https://eric.ed.gov",
    "https://www.ssrn.com",
    "https://www.plos.org",
];

pub(super) const JP_URLS: &[&str] = &[
    "https://www.u-tokyo.ac.jp",
    "https://www.kyoto-u.ac.jp",
    "https://www.titech.ac.jp",
    "https://www.osaka-u.ac.jp",
    "https://www.tohoku.ac.jp",
    "https://www.nagoya-u.ac.jp",
    "https://www.kyushu-u.ac.jp",
    "https://www.hokudai.ac.jp",
    "https://www.waseda.jp",
    "https://www.keio.ac.jp",
    "https://www.tsukuba.ac.jp",
    "https://www.kobe-u.ac.jp",
    "https://www.hiroshima-u.ac.jp",
    "https://www.hit-u.ac.jp",
    "https://www.ritsumei.ac.jp",
    "https://www.tmd.ac.jp",
    "https://www.tus.ac.jp",
    "https://www.chiba-u.ac.jp",
    "https://www.nagasaki-u.ac.jp",
    "https://www.okayama-u.ac.jp",
];
