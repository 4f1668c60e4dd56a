//! Statically declared registry of sample cadastral extracts
//!
//! Each sample is one complete document in one of the schema variants the
//! resolver supports. New variants get a constant and a registry entry.

/// Classic variant: 5-unit closed square, coordinates and point numbers
/// as attributes on a nested `Ordinate` node.
pub const CLASSIC_SQUARE: &str = r#"<NewBuilding>
	<EntitySpatial CsCode="52.2" Name="МСК-52">
		<SpatialElement Underground="0">
			<SpelementUnit TypeUnit="Точка" SuNmb="1">
				<Ordinate X="518754.05" Y="2150702.94" NumGeopoint="1" DeltaGeopoint="0.10"/>
			</SpelementUnit>
			<SpelementUnit TypeUnit="Точка" SuNmb="2">
				<Ordinate X="518763.23" Y="2150703.58" NumGeopoint="2" DeltaGeopoint="0.10"/>
			</SpelementUnit>
			<SpelementUnit TypeUnit="Точка" SuNmb="3">
				<Ordinate X="518762.79" Y="2150709.44" NumGeopoint="3" DeltaGeopoint="0.10"/>
			</SpelementUnit>
			<SpelementUnit TypeUnit="Точка" SuNmb="4">
				<Ordinate X="518753.61" Y="2150708.80" NumGeopoint="4" DeltaGeopoint="0.10"/>
			</SpelementUnit>
			<SpelementUnit TypeUnit="Точка" SuNmb="1">
				<Ordinate X="518754.05" Y="2150702.94" NumGeopoint="1" DeltaGeopoint="0.10"/>
			</SpelementUnit>
		</SpatialElement>
	</EntitySpatial>
</NewBuilding>"#;

/// Underscore variant: `Entity_Spatial`/`Spatial_Element`/`Spelement_Unit`
/// with `New_Ordinate` coordinate nodes and a `Cadastral_Number` label on
/// the parent. Three-unit open path.
pub const UNDERSCORE_LINE: &str = r#"<Land_Record>
  <Object Cadastral_Number="52:18:0060101:33">
    <Entity_Spatial>
      <Spatial_Element>
        <Spelement_Unit>
          <New_Ordinate X="410.10" Y="1320.40" Num_Geopoint="1"/>
        </Spelement_Unit>
        <Spelement_Unit>
          <New_Ordinate X="415.55" Y="1327.15" Num_Geopoint="2"/>
        </Spelement_Unit>
        <Spelement_Unit>
          <New_Ordinate X="421.00" Y="1333.90" Num_Geopoint="3"/>
        </Spelement_Unit>
      </Spatial_Element>
    </Entity_Spatial>
  </Object>
</Land_Record>"#;

/// Lowercase variant: bare `ordinate` unit nodes carrying the coordinate
/// attributes inline, numbered through `ord_nmb`.
pub const LOWERCASE_INLINE: &str = r#"<extract>
  <parcel definition="уч. 14 по ул. Полевая">
    <entity_spatial>
      <spatials_elements>
        <ordinate x="100.0" y="200.0" ord_nmb="1"/>
        <ordinate x="110.0" y="200.0" ord_nmb="2"/>
        <ordinate x="110.0" y="210.0" ord_nmb="3"/>
        <ordinate x="100.0" y="210.0" ord_nmb="4"/>
        <ordinate x="100.0" y="200.0" ord_nmb="1"/>
      </spatials_elements>
    </entity_spatial>
  </parcel>
</extract>"#;

/// Circle variant: one unit whose ordinate carries a radius.
pub const CIRCLE_WELL: &str = r#"<NewBuilding>
  <Well CadastralNumber="52:18:0060101:77">
    <EntitySpatial>
      <SpatialElement>
        <SpelementUnit TypeUnit="Окружность">
          <Ordinate X="518760.00" Y="2150710.00" Radius="2.5" NumGeopoint="1"/>
        </SpelementUnit>
      </SpatialElement>
    </EntitySpatial>
  </Well>
</NewBuilding>"#;

/// Two-ring entity: outer square boundary plus one inner ring (a hole).
pub const POLYGON_WITH_HOLE: &str = r#"<Parcels>
  <Parcel CadastralNumber="52:18:0060101:91">
    <EntitySpatial>
      <SpatialElement>
        <SpelementUnit><Ordinate X="0.0" Y="0.0" NumGeopoint="1"/></SpelementUnit>
        <SpelementUnit><Ordinate X="100.0" Y="0.0" NumGeopoint="2"/></SpelementUnit>
        <SpelementUnit><Ordinate X="100.0" Y="100.0" NumGeopoint="3"/></SpelementUnit>
        <SpelementUnit><Ordinate X="0.0" Y="100.0" NumGeopoint="4"/></SpelementUnit>
        <SpelementUnit><Ordinate X="0.0" Y="0.0" NumGeopoint="1"/></SpelementUnit>
      </SpatialElement>
      <SpatialElement>
        <SpelementUnit><Ordinate X="40.0" Y="40.0" NumGeopoint="5"/></SpelementUnit>
        <SpelementUnit><Ordinate X="60.0" Y="40.0" NumGeopoint="6"/></SpelementUnit>
        <SpelementUnit><Ordinate X="60.0" Y="60.0" NumGeopoint="7"/></SpelementUnit>
        <SpelementUnit><Ordinate X="40.0" Y="60.0" NumGeopoint="8"/></SpelementUnit>
        <SpelementUnit><Ordinate X="40.0" Y="40.0" NumGeopoint="5"/></SpelementUnit>
      </SpatialElement>
    </EntitySpatial>
  </Parcel>
</Parcels>"#;

/// Mixed-kind entity: one ring and one freestanding point.
pub const MIXED_KINDS: &str = r#"<Parcels>
  <Parcel CadastralNumber="52:18:0060101:12">
    <EntitySpatial>
      <SpatialElement>
        <SpelementUnit><Ordinate X="0.0" Y="0.0"/></SpelementUnit>
        <SpelementUnit><Ordinate X="10.0" Y="0.0"/></SpelementUnit>
        <SpelementUnit><Ordinate X="10.0" Y="10.0"/></SpelementUnit>
        <SpelementUnit><Ordinate X="0.0" Y="0.0"/></SpelementUnit>
      </SpatialElement>
      <SpatialElement>
        <SpelementUnit><Ordinate X="5.0" Y="5.0" PointPref="н" NumGeopoint="9"/></SpelementUnit>
      </SpatialElement>
    </EntitySpatial>
  </Parcel>
</Parcels>"#;

/// Malformed variant: the coordinate node lacks both X and Y.
pub const MISSING_COORDINATES: &str = r#"<NewBuilding>
  <EntitySpatial>
    <SpatialElement>
      <SpelementUnit TypeUnit="Точка" SuNmb="1">
        <Ordinate NumGeopoint="1" DeltaGeopoint="0.10"/>
      </SpelementUnit>
    </SpatialElement>
  </EntitySpatial>
</NewBuilding>"#;

/// All well-formed samples, by name
pub const SAMPLES: &[(&str, &str)] = &[
    ("classic_square", CLASSIC_SQUARE),
    ("underscore_line", UNDERSCORE_LINE),
    ("lowercase_inline", LOWERCASE_INLINE),
    ("circle_well", CIRCLE_WELL),
    ("polygon_with_hole", POLYGON_WITH_HOLE),
    ("mixed_kinds", MIXED_KINDS),
    ("missing_coordinates", MISSING_COORDINATES),
];
