/// A fixed entry of the local catalog: only name and image are known up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub image: &'static str,
}

/// Restaurants around Navanakorn. Their order defines the record ids.
pub const LOCAL_CATALOG: [CatalogEntry; 7] = [
    CatalogEntry {
        name: "ก๋วยเตี๋ยวเรือรังสิต นวนคร",
        image: "https://cheewajit.com/app/uploads/2021/04/image-130-edited.png",
    },
    CatalogEntry {
        name: "ส้มตำป้าน้อย นวนคร",
        image: "https://static.thairath.co.th/media/dFQROr7oWzulq5Fa6rHIRiYHCRigP4Gyivh7rgX5F5HqUmbf9L4SQODbALPtARByTGY.webp",
    },
    CatalogEntry {
        name: "ชาบูอิ่มอร่อย นวนคร",
        image: "https://image.makewebeasy.net/makeweb/m_1920x0/Ommd4Syoj/Contacts/image.jpg",
    },
    CatalogEntry {
        name: "ร้านข้าวมันไก่นวนคร",
        image: "https://img.wongnai.com/p/1920x0/2017/06/22/bbf899f7ab4341dea4aec6330c2afafd.jpg",
    },
    CatalogEntry {
        name: "หมูกระทะริมทาง นวนคร",
        image: "https://s.isanook.com/he/0/ud/1/7657/korean-grilled-pork-thai-styl.jpg",
    },
    CatalogEntry {
        name: "ครัวบ้านสวน นวนคร",
        image: "https://img.wongnai.com/p/1920x0/2018/05/15/bbe2772a39d845e1af3289ed4d6cd149.jpg",
    },
    CatalogEntry {
        name: "ร้านอาหารตามสั่ง 24 ชม. นวนคร",
        image: "https://patoisfdimage4-fcbugqebgmbma7he.z01.patois.com/patois/image/2023/10/19/PATOIS_2023-10-19_17_10_17_223c2e69-ea67-49da-b6aa-897c0df2b795.jpg",
    },
];
